//! Responsive grid column policy.

/// Width breakpoints for the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBreakpoints {
    /// Widths strictly above this get four columns.
    pub wide: u32,
    /// Widths strictly above this (and not wide) get three columns.
    pub medium: u32,
}

impl Default for GridBreakpoints {
    fn default() -> Self {
        Self {
            wide: 900,
            medium: 600,
        }
    }
}

impl GridBreakpoints {
    pub fn columns_for(&self, width: u32) -> usize {
        if width > self.wide {
            4
        } else if width > self.medium {
            3
        } else {
            2
        }
    }
}

/// Column count for a viewport `width` using the default breakpoints.
pub fn grid_columns(width: u32) -> usize {
    GridBreakpoints::default().columns_for(width)
}

/// Logical width of a terminal that is `cells` wide.
pub fn logical_width(cells: u16, cell_width_px: u16) -> u32 {
    u32::from(cells) * u32::from(cell_width_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_widths() {
        assert_eq!(grid_columns(1000), 4);
        assert_eq!(grid_columns(700), 3);
        assert_eq!(grid_columns(400), 2);
    }

    #[test]
    fn test_breakpoints_are_exclusive() {
        assert_eq!(grid_columns(900), 3);
        assert_eq!(grid_columns(901), 4);
        assert_eq!(grid_columns(600), 2);
        assert_eq!(grid_columns(601), 3);
        assert_eq!(grid_columns(0), 2);
    }

    #[test]
    fn test_terminal_widths() {
        assert_eq!(grid_columns(logical_width(80, 8)), 3);
        assert_eq!(grid_columns(logical_width(120, 8)), 4);
        assert_eq!(grid_columns(logical_width(60, 8)), 2);
    }
}
