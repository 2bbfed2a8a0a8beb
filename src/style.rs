//! Marker style hints handed to the map-rendering layer.
//!
//! An immutable lookup table; the renderer owns all visual presentation,
//! this side only names the icon and color per category.

use crate::classify::Category;

/// Font Awesome 4 icon name plus marker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

/// Closed/historical spaces render as a black X regardless of category.
pub const CLOSED_STYLE: MarkerStyle = MarkerStyle {
    icon: "times",
    color: "black",
};

const DEFAULT_STYLE: MarkerStyle = MarkerStyle {
    icon: "info",
    color: "gray",
};

const ACTIVE_STYLES: &[(Category, MarkerStyle)] = &[
    (Category::Bar, MarkerStyle { icon: "cutlery", color: "pink" }),
    (Category::Club, MarkerStyle { icon: "cutlery", color: "pink" }),
    (Category::Restaurant, MarkerStyle { icon: "cutlery", color: "pink" }),
    (Category::Nightlife, MarkerStyle { icon: "cutlery", color: "pink" }),
    (Category::Bathhouse, MarkerStyle { icon: "tint", color: "blue" }),
    (Category::OpenSpace, MarkerStyle { icon: "tree", color: "green" }),
    (Category::PublicArt, MarkerStyle { icon: "paint-brush", color: "purple" }),
    (Category::CommunityCentre, MarkerStyle { icon: "home", color: "orange" }),
    // FA4 has no 'cross'; 'plus' reads like one.
    (Category::Church, MarkerStyle { icon: "plus", color: "cadetblue" }),
    (Category::Retail, MarkerStyle { icon: "shopping-cart", color: "lightred" }),
    (Category::Health, MarkerStyle { icon: "medkit", color: "red" }),
    (Category::Cultural, MarkerStyle { icon: "university", color: "darkpurple" }),
    (Category::Shelter, MarkerStyle { icon: "bed", color: "darkred" }),
    (Category::Memorial, MarkerStyle { icon: "flag", color: "lightgray" }),
    (Category::Residential, MarkerStyle { icon: "building", color: "beige" }),
    (Category::GymSports, MarkerStyle { icon: "futbol-o", color: "darkgreen" }),
];

/// Style for an active space of the given category; unknown categories
/// (and `Other`) fall back to the gray info marker.
pub fn style_for(category: Category) -> MarkerStyle {
    ACTIVE_STYLES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_style() {
        let style = style_for(Category::Bathhouse);
        assert_eq!(style.icon, "tint");
        assert_eq!(style.color, "blue");
    }

    #[test]
    fn test_other_falls_back_to_default() {
        assert_eq!(style_for(Category::Other), DEFAULT_STYLE);
    }

    #[test]
    fn test_every_category_resolves() {
        // All split-variant categories have an explicit entry except Other.
        for category in [
            Category::Bar,
            Category::Club,
            Category::Restaurant,
            Category::Nightlife,
            Category::Bathhouse,
            Category::Retail,
            Category::PublicArt,
            Category::Cultural,
            Category::OpenSpace,
            Category::Church,
            Category::Shelter,
            Category::Memorial,
            Category::Residential,
            Category::CommunityCentre,
            Category::Health,
            Category::GymSports,
        ] {
            assert_ne!(style_for(category), DEFAULT_STYLE, "{:?}", category);
        }
    }
}
