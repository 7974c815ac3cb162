pub const RED: &str = "\x1b[31m";
pub const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub color: Option<&'static str>,
}

pub fn style_for(stocked: bool) -> StyleDescriptor {
    StyleDescriptor {
        color: if stocked { None } else { Some(RED) },
    }
}

impl StyleDescriptor {
    pub fn paint(&self, text: &str) -> String {
        match self.color {
            Some(color) => format!("{color}{text}{RESET}"),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{style_for, RED};

    #[test]
    fn test_out_of_stock_is_red() {
        assert_eq!(style_for(false).color, Some(RED));
        assert_eq!(style_for(true).color, None);
    }

    #[test]
    fn test_paint() {
        assert_eq!(style_for(true).paint("Football"), "Football");
        assert_eq!(
            style_for(false).paint("Basketball"),
            "\x1b[31mBasketball\x1b[0m"
        );
    }
}
