use log::info;
use vecmath::{F32x2, F32x3, F32x4, I32x3, Vector2, Vector3, Vector4};

fn main() {
    env_logger::init();

    info!("constructors");
    let x0 = F32x2::default();
    let x1 = F32x2::splat(1.0);
    let x2 = F32x2::new(1.0, 2.0);
    let x3 = x2;
    for v in [x0, x1, x2, x3] {
        println!("{}", v);
    }

    info!("conversions");
    let y4 = F32x3::from_vector2(x3);
    println!("{}", y4);
    let wide = F32x4::new(1.0, 2.0, 3.0, 4.0);
    println!("{} -> {}", wide, wide.truncate_to_vector2());
    println!("{} -> {}", wide, F32x4::from_vector2(wide.truncate_to_vector2()));

    info!("geometry");
    let t1 = F32x4::new(31.0, 96.0, -48.0, 15.0);
    let t2 = F32x4::new(-72.0, 14.0, -33.0, -57.0);
    println!("dot {} . {} = {}", t1, t2, Vector4::dot(t1, t2));
    println!("cross {} x {} = {}", t1, t2, t1.cross(t2));
    println!("angle = {} rad", Vector4::angle(t1, t2));
    println!("distance = {}", Vector4::distance(t1, t2));
    println!("lerp(0.25) = {}", Vector4::lerp(t1, t2, 0.25));
    println!("perpendicular of {} = {}", x2, x2.perpendicular());
    println!(
        "clamp_magnitude {} to 1 = {}",
        Vector2::new(3.0, 4.0),
        Vector2::clamp_magnitude(Vector2::new(3.0f32, 4.0), 1.0)
    );
    println!("pow {} ^ 3 = {}", Vector2::new(2, 3), Vector2::new(2, 3).pow(3));
    println!(
        "scale = {}",
        Vector3::scale(I32x3::new(2, 3, 4), Vector3::new(5, 6, 7))
    );

    info!("checked operations");
    match F32x3::zero().try_normalized() {
        Ok(v) => println!("normalized {}", v),
        Err(e) => println!("{}", e),
    }
}
