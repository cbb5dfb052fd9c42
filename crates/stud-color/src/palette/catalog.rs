//! The built-in brick color catalog.
//!
//! 44 reference colors with their catalog ids and display names. The order
//! is load-bearing: nearest-color ties resolve to the earliest entry, so
//! reordering this table changes quantization output.

/// `(catalog id, display name, 8-bit RGB)`
pub(super) const CLASSIC_CATALOG: &[(u16, &str, [u8; 3])] = &[
    (1, "white", [255, 255, 255]),
    (2, "grey", [221, 222, 221]),
    (5, "brick yellow", [217, 187, 123]),
    (18, "nougat", [214, 114, 64]),
    (21, "bright red", [255, 0, 0]),
    (23, "bright blue", [0, 0, 255]),
    (24, "bright yellow", [255, 255, 0]),
    (26, "black", [0, 0, 0]),
    (28, "dark green", [0, 153, 0]),
    (37, "bright green", [0, 204, 0]),
    (38, "dark orange", [168, 61, 21]),
    (102, "medium blue", [71, 140, 198]),
    (106, "bright orange", [255, 102, 0]),
    (107, "bright bluish green", [5, 157, 158]),
    (119, "bright yellowish-green", [149, 185, 11]),
    (124, "bright reddish violet", [153, 0, 102]),
    (135, "sand blue", [94, 116, 140]),
    (138, "sand yellow", [141, 116, 82]),
    (140, "earth blue", [0, 37, 65]),
    (141, "earth green", [0, 51, 0]),
    (151, "sand green", [95, 130, 101]),
    (154, "dark red", [128, 8, 27]),
    (191, "flame yellowish orange", [244, 155, 0]),
    (192, "reddish brown", [91, 28, 12]),
    (194, "medium stone grey", [156, 146, 145]),
    (199, "dark stone grey", [76, 81, 86]),
    (208, "light stone grey", [228, 228, 218]),
    (212, "light royal blue", [135, 192, 234]),
    (221, "bright purple", [222, 55, 139]),
    (222, "light purple", [238, 157, 195]),
    (226, "cool yellow", [255, 255, 153]),
    (268, "dark purple", [44, 21, 119]),
    (283, "light nougat", [245, 193, 137]),
    (308, "dark brown", [48, 15, 6]),
    (312, "medium nougat", [170, 125, 85]),
    (321, "dark azur", [70, 155, 195]),
    (322, "medium azur", [104, 195, 226]),
    (323, "aqua", [211, 242, 234]),
    (324, "medium lavender", [160, 110, 185]),
    (325, "lavender", [205, 164, 222]),
    (329, "white glow", [245, 243, 215]),
    (326, "spring yellowish green", [226, 249, 154]),
    (330, "olive green", [119, 119, 78]),
    (331, "medium-yellowish green", [150, 185, 59]),
];
