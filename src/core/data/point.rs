/// A pixel position. Signed so that window coordinates outside the image can be represented.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
