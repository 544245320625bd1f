//! Responsive layout detection.

/// Widest viewport, in logical pixels, still treated as mobile
pub const MOBILE_BREAKPOINT_PX: u32 = 850;

/// Logical pixels per terminal column
pub const CELL_WIDTH_PX: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutClass {
    Mobile,
    Desktop,
}

impl LayoutClass {
    pub fn from_width_px(width_px: u32) -> Self {
        if width_px <= MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        *self == Self::Mobile
    }
}

/// Terminal width in columns converted to logical pixels
pub fn columns_to_px(columns: u16) -> u32 {
    u32::from(columns) * CELL_WIDTH_PX
}

pub fn is_mobile_width(width_px: u32) -> bool {
    LayoutClass::from_width_px(width_px).is_mobile()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(500, true)]
    #[case(800, true)]
    #[case(850, true)]
    #[case(851, false)]
    #[case(900, false)]
    #[case(1920, false)]
    fn test_breakpoint(#[case] width: u32, #[case] mobile: bool) {
        assert_eq!(is_mobile_width(width), mobile);
    }

    #[test]
    fn test_columns_around_breakpoint() {
        assert!(is_mobile_width(columns_to_px(80)));
        assert!(is_mobile_width(columns_to_px(106)));
        assert!(!is_mobile_width(columns_to_px(107)));
        assert!(!is_mobile_width(columns_to_px(200)));
    }
}
