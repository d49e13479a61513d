use nalgebra::Vector3;

pub fn vec_64_to_32(v: Vector3<f64>) -> Vector3<f32> {
    Vector3::new(v.x as f32, v.y as f32, v.z as f32)
}

pub fn vec_32_to_64(v: Vector3<f32>) -> Vector3<f64> {
    Vector3::new(v.x as f64, v.y as f64, v.z as f64)
}

pub fn vec_to_degrees(v: Vector3<f64>) -> Vector3<f64> {
    Vector3::new(v.x.to_degrees(), v.y.to_degrees(), v.z.to_degrees())
}
