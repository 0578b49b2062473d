use serde::{Deserialize, Serialize};

/// Orientation of the stored pixels relative to the camera sensor, as the
/// EXIF `Orientation` tag encodes it.
///
/// Anything that rotates pixels must reset this to `TopLeft`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    TopLeft = 1,
    TopRight = 2,
    BottomRight = 3,
    BottomLeft = 4,
    LeftTop = 5,
    RightTop = 6,
    RightBottom = 7,
    LeftBottom = 8,
}

impl Orientation {
    pub fn from_exif(value: u16) -> Option<Self> {
        let orientation = match value {
            1 => Orientation::TopLeft,
            2 => Orientation::TopRight,
            3 => Orientation::BottomRight,
            4 => Orientation::BottomLeft,
            5 => Orientation::LeftTop,
            6 => Orientation::RightTop,
            7 => Orientation::RightBottom,
            8 => Orientation::LeftBottom,
            _ => return None,
        };
        Some(orientation)
    }

    pub fn exif_value(self) -> u16 {
        self as u16
    }

    /// True for the four orientations that transpose the image.
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::LeftTop
                | Orientation::RightTop
                | Orientation::RightBottom
                | Orientation::LeftBottom
        )
    }

    pub fn is_mirrored(self) -> bool {
        matches!(
            self,
            Orientation::TopRight
                | Orientation::BottomLeft
                | Orientation::LeftTop
                | Orientation::RightBottom
        )
    }

    /// Display dimensions for stored dimensions `(width, height)`.
    pub fn oriented_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}
