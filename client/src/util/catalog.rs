//! Static option catalogs for the filter widgets.
//!
//! Values are the identifiers the search backend stores (`drug_shape`,
//! `color_class1`), so they are sent verbatim.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Preview image shown when no shape has been confirmed.
pub const DEFAULT_SHAPE_IMAGE: &str = "/static/img/shapes/circle.png";

/// One selectable pill shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeOption {
    pub value: &'static str,
    pub image: &'static str,
}

/// One selectable pill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorOption {
    pub value: &'static str,
    pub swatch: &'static str,
}

/// One result ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SHAPES: &[ShapeOption] = &[
    ShapeOption { value: "원형", image: "/static/img/shapes/circle.png" },
    ShapeOption { value: "타원형", image: "/static/img/shapes/oval.png" },
    ShapeOption { value: "장방형", image: "/static/img/shapes/oblong.png" },
    ShapeOption { value: "반원형", image: "/static/img/shapes/semicircle.png" },
    ShapeOption { value: "삼각형", image: "/static/img/shapes/triangle.png" },
    ShapeOption { value: "사각형", image: "/static/img/shapes/square.png" },
    ShapeOption { value: "마름모형", image: "/static/img/shapes/rhombus.png" },
    ShapeOption { value: "오각형", image: "/static/img/shapes/pentagon.png" },
    ShapeOption { value: "육각형", image: "/static/img/shapes/hexagon.png" },
    ShapeOption { value: "팔각형", image: "/static/img/shapes/octagon.png" },
    ShapeOption { value: "기타", image: "/static/img/shapes/other.png" },
];

pub const COLORS: &[ColorOption] = &[
    ColorOption { value: "하양", swatch: "#ffffff" },
    ColorOption { value: "노랑", swatch: "#ffd600" },
    ColorOption { value: "주황", swatch: "#ff9800" },
    ColorOption { value: "분홍", swatch: "#f48fb1" },
    ColorOption { value: "빨강", swatch: "#e53935" },
    ColorOption { value: "갈색", swatch: "#795548" },
    ColorOption { value: "연두", swatch: "#aed581" },
    ColorOption { value: "초록", swatch: "#43a047" },
    ColorOption { value: "청록", swatch: "#009688" },
    ColorOption { value: "파랑", swatch: "#1e88e5" },
    ColorOption { value: "남색", swatch: "#283593" },
    ColorOption { value: "자주", swatch: "#8e24aa" },
    ColorOption { value: "보라", swatch: "#7e57c2" },
    ColorOption { value: "회색", swatch: "#9e9e9e" },
    ColorOption { value: "검정", swatch: "#212121" },
    ColorOption { value: "투명", swatch: "transparent" },
];

pub const SORT_OPTIONS: &[SortOption] = &[
    SortOption { value: "relevance", label: "관련도순" },
    SortOption { value: "name_asc", label: "이름순" },
    SortOption { value: "name_desc", label: "이름 역순" },
    SortOption { value: "entp_asc", label: "제조사순" },
];

/// Manufacturers offered in the advanced form's dropdown.
pub const MANUFACTURERS: &[&str] = &[
    "동아제약",
    "유한양행",
    "종근당",
    "한미약품",
    "대웅제약",
    "녹십자",
    "일동제약",
    "보령제약",
];

pub fn find_shape(value: &str) -> Option<&'static ShapeOption> {
    SHAPES.iter().find(|s| s.value == value)
}

pub fn is_known_color(value: &str) -> bool {
    COLORS.iter().any(|c| c.value == value)
}

pub fn is_known_manufacturer(value: &str) -> bool {
    MANUFACTURERS.contains(&value)
}

/// Preview image for a confirmed shape, falling back to the default circle.
pub fn shape_image(value: Option<&str>) -> &'static str {
    value
        .and_then(find_shape)
        .map_or(DEFAULT_SHAPE_IMAGE, |s| s.image)
}
