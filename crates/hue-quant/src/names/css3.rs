//! Built-in reference dataset: the CSS3 extended color keywords.
//!
//! 147 names in alphabetical order. Several names share a value (`aqua` /
//! `cyan`, `fuchsia` / `magenta` and the `gray` / `grey` spellings); the
//! alphabetically first name wins exact lookups and distance ties.

use super::table::NamedColor;
use crate::color::Rgb;

pub(super) const CSS3_COLORS: [NamedColor; 147] = [
    NamedColor::new("aliceblue", Rgb::new(240, 248, 255)),
    NamedColor::new("antiquewhite", Rgb::new(250, 235, 215)),
    NamedColor::new("aqua", Rgb::new(0, 255, 255)),
    NamedColor::new("aquamarine", Rgb::new(127, 255, 212)),
    NamedColor::new("azure", Rgb::new(240, 255, 255)),
    NamedColor::new("beige", Rgb::new(245, 245, 220)),
    NamedColor::new("bisque", Rgb::new(255, 228, 196)),
    NamedColor::new("black", Rgb::new(0, 0, 0)),
    NamedColor::new("blanchedalmond", Rgb::new(255, 235, 205)),
    NamedColor::new("blue", Rgb::new(0, 0, 255)),
    NamedColor::new("blueviolet", Rgb::new(138, 43, 226)),
    NamedColor::new("brown", Rgb::new(165, 42, 42)),
    NamedColor::new("burlywood", Rgb::new(222, 184, 135)),
    NamedColor::new("cadetblue", Rgb::new(95, 158, 160)),
    NamedColor::new("chartreuse", Rgb::new(127, 255, 0)),
    NamedColor::new("chocolate", Rgb::new(210, 105, 30)),
    NamedColor::new("coral", Rgb::new(255, 127, 80)),
    NamedColor::new("cornflowerblue", Rgb::new(100, 149, 237)),
    NamedColor::new("cornsilk", Rgb::new(255, 248, 220)),
    NamedColor::new("crimson", Rgb::new(220, 20, 60)),
    NamedColor::new("cyan", Rgb::new(0, 255, 255)),
    NamedColor::new("darkblue", Rgb::new(0, 0, 139)),
    NamedColor::new("darkcyan", Rgb::new(0, 139, 139)),
    NamedColor::new("darkgoldenrod", Rgb::new(184, 134, 11)),
    NamedColor::new("darkgray", Rgb::new(169, 169, 169)),
    NamedColor::new("darkgreen", Rgb::new(0, 100, 0)),
    NamedColor::new("darkgrey", Rgb::new(169, 169, 169)),
    NamedColor::new("darkkhaki", Rgb::new(189, 183, 107)),
    NamedColor::new("darkmagenta", Rgb::new(139, 0, 139)),
    NamedColor::new("darkolivegreen", Rgb::new(85, 107, 47)),
    NamedColor::new("darkorange", Rgb::new(255, 140, 0)),
    NamedColor::new("darkorchid", Rgb::new(153, 50, 204)),
    NamedColor::new("darkred", Rgb::new(139, 0, 0)),
    NamedColor::new("darksalmon", Rgb::new(233, 150, 122)),
    NamedColor::new("darkseagreen", Rgb::new(143, 188, 143)),
    NamedColor::new("darkslateblue", Rgb::new(72, 61, 139)),
    NamedColor::new("darkslategray", Rgb::new(47, 79, 79)),
    NamedColor::new("darkslategrey", Rgb::new(47, 79, 79)),
    NamedColor::new("darkturquoise", Rgb::new(0, 206, 209)),
    NamedColor::new("darkviolet", Rgb::new(148, 0, 211)),
    NamedColor::new("deeppink", Rgb::new(255, 20, 147)),
    NamedColor::new("deepskyblue", Rgb::new(0, 191, 255)),
    NamedColor::new("dimgray", Rgb::new(105, 105, 105)),
    NamedColor::new("dimgrey", Rgb::new(105, 105, 105)),
    NamedColor::new("dodgerblue", Rgb::new(30, 144, 255)),
    NamedColor::new("firebrick", Rgb::new(178, 34, 34)),
    NamedColor::new("floralwhite", Rgb::new(255, 250, 240)),
    NamedColor::new("forestgreen", Rgb::new(34, 139, 34)),
    NamedColor::new("fuchsia", Rgb::new(255, 0, 255)),
    NamedColor::new("gainsboro", Rgb::new(220, 220, 220)),
    NamedColor::new("ghostwhite", Rgb::new(248, 248, 255)),
    NamedColor::new("gold", Rgb::new(255, 215, 0)),
    NamedColor::new("goldenrod", Rgb::new(218, 165, 32)),
    NamedColor::new("gray", Rgb::new(128, 128, 128)),
    NamedColor::new("green", Rgb::new(0, 128, 0)),
    NamedColor::new("greenyellow", Rgb::new(173, 255, 47)),
    NamedColor::new("grey", Rgb::new(128, 128, 128)),
    NamedColor::new("honeydew", Rgb::new(240, 255, 240)),
    NamedColor::new("hotpink", Rgb::new(255, 105, 180)),
    NamedColor::new("indianred", Rgb::new(205, 92, 92)),
    NamedColor::new("indigo", Rgb::new(75, 0, 130)),
    NamedColor::new("ivory", Rgb::new(255, 255, 240)),
    NamedColor::new("khaki", Rgb::new(240, 230, 140)),
    NamedColor::new("lavender", Rgb::new(230, 230, 250)),
    NamedColor::new("lavenderblush", Rgb::new(255, 240, 245)),
    NamedColor::new("lawngreen", Rgb::new(124, 252, 0)),
    NamedColor::new("lemonchiffon", Rgb::new(255, 250, 205)),
    NamedColor::new("lightblue", Rgb::new(173, 216, 230)),
    NamedColor::new("lightcoral", Rgb::new(240, 128, 128)),
    NamedColor::new("lightcyan", Rgb::new(224, 255, 255)),
    NamedColor::new("lightgoldenrodyellow", Rgb::new(250, 250, 210)),
    NamedColor::new("lightgray", Rgb::new(211, 211, 211)),
    NamedColor::new("lightgreen", Rgb::new(144, 238, 144)),
    NamedColor::new("lightgrey", Rgb::new(211, 211, 211)),
    NamedColor::new("lightpink", Rgb::new(255, 182, 193)),
    NamedColor::new("lightsalmon", Rgb::new(255, 160, 122)),
    NamedColor::new("lightseagreen", Rgb::new(32, 178, 170)),
    NamedColor::new("lightskyblue", Rgb::new(135, 206, 250)),
    NamedColor::new("lightslategray", Rgb::new(119, 136, 153)),
    NamedColor::new("lightslategrey", Rgb::new(119, 136, 153)),
    NamedColor::new("lightsteelblue", Rgb::new(176, 196, 222)),
    NamedColor::new("lightyellow", Rgb::new(255, 255, 224)),
    NamedColor::new("lime", Rgb::new(0, 255, 0)),
    NamedColor::new("limegreen", Rgb::new(50, 205, 50)),
    NamedColor::new("linen", Rgb::new(250, 240, 230)),
    NamedColor::new("magenta", Rgb::new(255, 0, 255)),
    NamedColor::new("maroon", Rgb::new(128, 0, 0)),
    NamedColor::new("mediumaquamarine", Rgb::new(102, 205, 170)),
    NamedColor::new("mediumblue", Rgb::new(0, 0, 205)),
    NamedColor::new("mediumorchid", Rgb::new(186, 85, 211)),
    NamedColor::new("mediumpurple", Rgb::new(147, 112, 219)),
    NamedColor::new("mediumseagreen", Rgb::new(60, 179, 113)),
    NamedColor::new("mediumslateblue", Rgb::new(123, 104, 238)),
    NamedColor::new("mediumspringgreen", Rgb::new(0, 250, 154)),
    NamedColor::new("mediumturquoise", Rgb::new(72, 209, 204)),
    NamedColor::new("mediumvioletred", Rgb::new(199, 21, 133)),
    NamedColor::new("midnightblue", Rgb::new(25, 25, 112)),
    NamedColor::new("mintcream", Rgb::new(245, 255, 250)),
    NamedColor::new("mistyrose", Rgb::new(255, 228, 225)),
    NamedColor::new("moccasin", Rgb::new(255, 228, 181)),
    NamedColor::new("navajowhite", Rgb::new(255, 222, 173)),
    NamedColor::new("navy", Rgb::new(0, 0, 128)),
    NamedColor::new("oldlace", Rgb::new(253, 245, 230)),
    NamedColor::new("olive", Rgb::new(128, 128, 0)),
    NamedColor::new("olivedrab", Rgb::new(107, 142, 35)),
    NamedColor::new("orange", Rgb::new(255, 165, 0)),
    NamedColor::new("orangered", Rgb::new(255, 69, 0)),
    NamedColor::new("orchid", Rgb::new(218, 112, 214)),
    NamedColor::new("palegoldenrod", Rgb::new(238, 232, 170)),
    NamedColor::new("palegreen", Rgb::new(152, 251, 152)),
    NamedColor::new("paleturquoise", Rgb::new(175, 238, 238)),
    NamedColor::new("palevioletred", Rgb::new(219, 112, 147)),
    NamedColor::new("papayawhip", Rgb::new(255, 239, 213)),
    NamedColor::new("peachpuff", Rgb::new(255, 218, 185)),
    NamedColor::new("peru", Rgb::new(205, 133, 63)),
    NamedColor::new("pink", Rgb::new(255, 192, 203)),
    NamedColor::new("plum", Rgb::new(221, 160, 221)),
    NamedColor::new("powderblue", Rgb::new(176, 224, 230)),
    NamedColor::new("purple", Rgb::new(128, 0, 128)),
    NamedColor::new("red", Rgb::new(255, 0, 0)),
    NamedColor::new("rosybrown", Rgb::new(188, 143, 143)),
    NamedColor::new("royalblue", Rgb::new(65, 105, 225)),
    NamedColor::new("saddlebrown", Rgb::new(139, 69, 19)),
    NamedColor::new("salmon", Rgb::new(250, 128, 114)),
    NamedColor::new("sandybrown", Rgb::new(244, 164, 96)),
    NamedColor::new("seagreen", Rgb::new(46, 139, 87)),
    NamedColor::new("seashell", Rgb::new(255, 245, 238)),
    NamedColor::new("sienna", Rgb::new(160, 82, 45)),
    NamedColor::new("silver", Rgb::new(192, 192, 192)),
    NamedColor::new("skyblue", Rgb::new(135, 206, 235)),
    NamedColor::new("slateblue", Rgb::new(106, 90, 205)),
    NamedColor::new("slategray", Rgb::new(112, 128, 144)),
    NamedColor::new("slategrey", Rgb::new(112, 128, 144)),
    NamedColor::new("snow", Rgb::new(255, 250, 250)),
    NamedColor::new("springgreen", Rgb::new(0, 255, 127)),
    NamedColor::new("steelblue", Rgb::new(70, 130, 180)),
    NamedColor::new("tan", Rgb::new(210, 180, 140)),
    NamedColor::new("teal", Rgb::new(0, 128, 128)),
    NamedColor::new("thistle", Rgb::new(216, 191, 216)),
    NamedColor::new("tomato", Rgb::new(255, 99, 71)),
    NamedColor::new("turquoise", Rgb::new(64, 224, 208)),
    NamedColor::new("violet", Rgb::new(238, 130, 238)),
    NamedColor::new("wheat", Rgb::new(245, 222, 179)),
    NamedColor::new("white", Rgb::new(255, 255, 255)),
    NamedColor::new("whitesmoke", Rgb::new(245, 245, 245)),
    NamedColor::new("yellow", Rgb::new(255, 255, 0)),
    NamedColor::new("yellowgreen", Rgb::new(154, 205, 50)),
];
