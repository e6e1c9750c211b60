use bevy::color::palettes::css;
use bevy::prelude::*;

use super::error::ConfigError;

// Every CSS named colour, keyed by its lowercase CSS spelling.
const NAMED_COLORS: [(&str, Srgba); 148] = [
    ("aliceblue", css::ALICE_BLUE),
    ("antiquewhite", css::ANTIQUE_WHITE),
    ("aqua", css::AQUA),
    ("aquamarine", css::AQUAMARINE),
    ("azure", css::AZURE),
    ("beige", css::BEIGE),
    ("bisque", css::BISQUE),
    ("black", css::BLACK),
    ("blanchedalmond", css::BLANCHED_ALMOND),
    ("blue", css::BLUE),
    ("blueviolet", css::BLUE_VIOLET),
    ("brown", css::BROWN),
    ("burlywood", css::BURLYWOOD),
    ("cadetblue", css::CADET_BLUE),
    ("chartreuse", css::CHARTREUSE),
    ("chocolate", css::CHOCOLATE),
    ("coral", css::CORAL),
    ("cornflowerblue", css::CORNFLOWER_BLUE),
    ("cornsilk", css::CORNSILK),
    ("crimson", css::CRIMSON),
    ("darkblue", css::DARK_BLUE),
    ("darkcyan", css::DARK_CYAN),
    ("darkgoldenrod", css::DARK_GOLDENROD),
    ("darkgray", css::DARK_GRAY),
    ("darkgreen", css::DARK_GREEN),
    ("darkgrey", css::DARK_GREY),
    ("darkkhaki", css::DARK_KHAKI),
    ("darkmagenta", css::DARK_MAGENTA),
    ("darkolivegreen", css::DARK_OLIVEGREEN),
    ("darkorange", css::DARK_ORANGE),
    ("darkorchid", css::DARK_ORCHID),
    ("darkred", css::DARK_RED),
    ("darksalmon", css::DARK_SALMON),
    ("darkseagreen", css::DARK_SEA_GREEN),
    ("darkslateblue", css::DARK_SLATE_BLUE),
    ("darkslategray", css::DARK_SLATE_GRAY),
    ("darkslategrey", css::DARK_SLATE_GREY),
    ("darkturquoise", css::DARK_TURQUOISE),
    ("darkviolet", css::DARK_VIOLET),
    ("deeppink", css::DEEP_PINK),
    ("deepskyblue", css::DEEP_SKY_BLUE),
    ("dimgray", css::DIM_GRAY),
    ("dimgrey", css::DIM_GREY),
    ("dodgerblue", css::DODGER_BLUE),
    ("firebrick", css::FIRE_BRICK),
    ("floralwhite", css::FLORAL_WHITE),
    ("forestgreen", css::FOREST_GREEN),
    ("fuchsia", css::FUCHSIA),
    ("gainsboro", css::GAINSBORO),
    ("ghostwhite", css::GHOST_WHITE),
    ("gold", css::GOLD),
    ("goldenrod", css::GOLDENROD),
    ("gray", css::GRAY),
    ("green", css::GREEN),
    ("greenyellow", css::GREEN_YELLOW),
    ("grey", css::GREY),
    ("honeydew", css::HONEYDEW),
    ("hotpink", css::HOT_PINK),
    ("indianred", css::INDIAN_RED),
    ("indigo", css::INDIGO),
    ("ivory", css::IVORY),
    ("khaki", css::KHAKI),
    ("lavender", css::LAVENDER),
    ("lavenderblush", css::LAVENDER_BLUSH),
    ("lawngreen", css::LAWN_GREEN),
    ("lemonchiffon", css::LEMON_CHIFFON),
    ("lightblue", css::LIGHT_BLUE),
    ("lightcoral", css::LIGHT_CORAL),
    ("lightcyan", css::LIGHT_CYAN),
    ("lightgoldenrodyellow", css::LIGHT_GOLDENROD_YELLOW),
    ("lightgray", css::LIGHT_GRAY),
    ("lightgreen", css::LIGHT_GREEN),
    ("lightgrey", css::LIGHT_GREY),
    ("lightpink", css::LIGHT_PINK),
    ("lightsalmon", css::LIGHT_SALMON),
    ("lightseagreen", css::LIGHT_SEA_GREEN),
    ("lightskyblue", css::LIGHT_SKY_BLUE),
    ("lightslategray", css::LIGHT_SLATE_GRAY),
    ("lightslategrey", css::LIGHT_SLATE_GREY),
    ("lightsteelblue", css::LIGHT_STEEL_BLUE),
    ("lightyellow", css::LIGHT_YELLOW),
    ("lime", css::LIME),
    ("limegreen", css::LIMEGREEN),
    ("linen", css::LINEN),
    ("magenta", css::MAGENTA),
    ("maroon", css::MAROON),
    ("mediumaquamarine", css::MEDIUM_AQUAMARINE),
    ("mediumblue", css::MEDIUM_BLUE),
    ("mediumorchid", css::MEDIUM_ORCHID),
    ("mediumpurple", css::MEDIUM_PURPLE),
    ("mediumseagreen", css::MEDIUM_SEA_GREEN),
    ("mediumslateblue", css::MEDIUM_SLATE_BLUE),
    ("mediumspringgreen", css::MEDIUM_SPRING_GREEN),
    ("mediumturquoise", css::MEDIUM_TURQUOISE),
    ("mediumvioletred", css::MEDIUM_VIOLET_RED),
    ("midnightblue", css::MIDNIGHT_BLUE),
    ("mintcream", css::MINT_CREAM),
    ("mistyrose", css::MISTY_ROSE),
    ("moccasin", css::MOCCASIN),
    ("navajowhite", css::NAVAJO_WHITE),
    ("navy", css::NAVY),
    ("oldlace", css::OLD_LACE),
    ("olive", css::OLIVE),
    ("olivedrab", css::OLIVE_DRAB),
    ("orange", css::ORANGE),
    ("orangered", css::ORANGE_RED),
    ("orchid", css::ORCHID),
    ("palegoldenrod", css::PALE_GOLDENROD),
    ("palegreen", css::PALE_GREEN),
    ("paleturquoise", css::PALE_TURQUOISE),
    ("palevioletred", css::PALE_VIOLETRED),
    ("papayawhip", css::PAPAYA_WHIP),
    ("peachpuff", css::PEACHPUFF),
    ("peru", css::PERU),
    ("pink", css::PINK),
    ("plum", css::PLUM),
    ("powderblue", css::POWDER_BLUE),
    ("purple", css::PURPLE),
    ("rebeccapurple", css::REBECCA_PURPLE),
    ("red", css::RED),
    ("rosybrown", css::ROSY_BROWN),
    ("royalblue", css::ROYAL_BLUE),
    ("saddlebrown", css::SADDLE_BROWN),
    ("salmon", css::SALMON),
    ("sandybrown", css::SANDY_BROWN),
    ("seashell", css::SEASHELL),
    ("seagreen", css::SEA_GREEN),
    ("sienna", css::SIENNA),
    ("silver", css::SILVER),
    ("skyblue", css::SKY_BLUE),
    ("slateblue", css::SLATE_BLUE),
    ("slategray", css::SLATE_GRAY),
    ("slategrey", css::SLATE_GREY),
    ("snow", css::SNOW),
    ("springgreen", css::SPRING_GREEN),
    ("steelblue", css::STEEL_BLUE),
    ("tan", css::TAN),
    ("teal", css::TEAL),
    ("thistle", css::THISTLE),
    ("tomato", css::TOMATO),
    ("turquoise", css::TURQUOISE),
    ("violet", css::VIOLET),
    ("wheat", css::WHEAT),
    ("white", css::WHITE),
    ("whitesmoke", css::WHITE_SMOKE),
    ("yellow", css::YELLOW),
    ("yellowgreen", css::YELLOW_GREEN),
    ("cyan", css::AQUA),
];

/// Parses a CSS colour: a named colour (case-insensitive), `transparent`,
/// `#rgb` / `#rgba` / `#rrggbb` / `#rrggbbaa` hex, or the `rgb()` / `rgba()` /
/// `hsl()` / `hsla()` functional forms (comma or space separated, optional
/// `/ alpha`).
pub fn parse_color(value: &str) -> Result<Color, ConfigError> {
    let lower = value.trim().to_ascii_lowercase();
    let parsed = if lower == "transparent" {
        Some(Color::NONE)
    } else if let Some((_, c)) = NAMED_COLORS.iter().find(|(n, _)| *n == lower) {
        Some(Color::from(*c))
    } else if lower.starts_with('#') {
        Srgba::hex(&lower).ok().map(Color::from)
    } else {
        parse_functional(&lower)
    };
    parsed.ok_or_else(|| ConfigError::Color(value.to_string()))
}

fn parse_functional(s: &str) -> Option<Color> {
    let (func, rest) = s.split_once('(')?;
    let body = rest.strip_suffix(')')?;
    let args: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    let (channels, alpha) = match args.as_slice() {
        [a, b, c] => ([*a, *b, *c], 1.0),
        [a, b, c, al] => ([*a, *b, *c], unit(al, 1.0)?),
        _ => return None,
    };
    match func.trim() {
        "rgb" | "rgba" => {
            let [r, g, b] = channels;
            Some(Color::srgba(
                unit(r, 255.0)?,
                unit(g, 255.0)?,
                unit(b, 255.0)?,
                alpha,
            ))
        }
        "hsl" | "hsla" => {
            let [h, sat, light] = channels;
            let hue = h.strip_suffix("deg").unwrap_or(h).parse::<f32>().ok()?;
            if !hue.is_finite() {
                return None;
            }
            Some(Color::hsla(
                hue.rem_euclid(360.0),
                unit(sat, 100.0)?,
                unit(light, 100.0)?,
                alpha,
            ))
        }
        _ => None,
    }
}

// A channel as a 0..=1 fraction: `50%`, or a plain number over `scale`.
fn unit(v: &str, scale: f32) -> Option<f32> {
    let (num, div) = match v.strip_suffix('%') {
        Some(pct) => (pct, 100.0),
        None => (v, scale),
    };
    let n = num.parse::<f32>().ok()?;
    n.is_finite().then(|| (n / div).clamp(0.0, 1.0))
}

/// Like [`parse_color`] but falls back to black, logging the bad value.
pub fn color_or_black(value: &str) -> Color {
    parse_color(value).unwrap_or_else(|e| {
        warn!(target: "wheel", "{e}; drawing black instead");
        Color::BLACK
    })
}
