//! Interpreted renderings for tags whose raw value is a code or a ratio.
//!
//! Every function falls back to the default [`Value`] rendering when the
//! value is not of the shape it expects.

use crate::value::Value;

/// Default rendering.
pub fn value(v: &Value) -> String {
    v.to_string()
}

fn lookup(v: &Value, table: &[(i64, &str)]) -> String {
    match v.to_long(0) {
        Some(code) => match table.iter().find(|(c, _)| *c == code) {
            Some((_, text)) => (*text).to_string(),
            None => format!("({code})"),
        },
        None => v.to_string(),
    }
}

fn ratio(v: &Value, index: usize) -> Option<f64> {
    v.to_rational(index)
        .and_then(|(n, d)| (d != 0).then(|| n as f64 / d as f64))
}

pub fn compression(v: &Value) -> String {
    lookup(
        v,
        &[
            (1, "Uncompressed"),
            (2, "CCITT RLE"),
            (3, "T4/Group 3 Fax"),
            (4, "T6/Group 4 Fax"),
            (5, "LZW"),
            (6, "JPEG (old-style)"),
            (7, "JPEG"),
            (8, "Adobe Deflate"),
            (32773, "PackBits (Macintosh RLE)"),
            (34892, "Lossy JPEG"),
        ],
    )
}

pub fn orientation(v: &Value) -> String {
    lookup(
        v,
        &[
            (1, "top, left"),
            (2, "top, right"),
            (3, "bottom, right"),
            (4, "bottom, left"),
            (5, "left, top"),
            (6, "right, top"),
            (7, "right, bottom"),
            (8, "left, bottom"),
        ],
    )
}

pub fn resolution_unit(v: &Value) -> String {
    lookup(v, &[(1, "none"), (2, "inch"), (3, "cm")])
}

pub fn ycbcr_positioning(v: &Value) -> String {
    lookup(v, &[(1, "Centered"), (2, "Co-sited")])
}

pub fn exposure_program(v: &Value) -> String {
    lookup(
        v,
        &[
            (0, "Not defined"),
            (1, "Manual"),
            (2, "Auto"),
            (3, "Aperture priority"),
            (4, "Shutter priority"),
            (5, "Creative program"),
            (6, "Action program"),
            (7, "Portrait mode"),
            (8, "Landscape mode"),
        ],
    )
}

pub fn metering_mode(v: &Value) -> String {
    lookup(
        v,
        &[
            (0, "Unknown"),
            (1, "Average"),
            (2, "Center weighted average"),
            (3, "Spot"),
            (4, "Multi-spot"),
            (5, "Multi-segment"),
            (6, "Partial"),
            (255, "Other"),
        ],
    )
}

pub fn color_space(v: &Value) -> String {
    lookup(v, &[(1, "sRGB"), (2, "Adobe RGB"), (0xffff, "Uncalibrated")])
}

pub fn gps_altitude_ref(v: &Value) -> String {
    lookup(v, &[(0, "Above sea level"), (1, "Below sea level")])
}

pub fn flash(v: &Value) -> String {
    let Some(code) = v.to_long(0) else {
        return v.to_string();
    };
    if code & 0x01 == 0 {
        return if code & 0x20 != 0 { "No flash function".into() } else { "No flash".into() };
    }
    let mut text = String::from("Fired");
    match (code >> 1) & 0x03 {
        2 => text.push_str(", return light not detected"),
        3 => text.push_str(", return light detected"),
        _ => {}
    }
    match (code >> 3) & 0x03 {
        1 => text.push_str(", compulsory flash mode"),
        3 => text.push_str(", auto mode"),
        _ => {}
    }
    if code & 0x40 != 0 {
        text.push_str(", red-eye reduction");
    }
    text
}

pub fn exposure_time(v: &Value) -> String {
    match v.to_rational(0) {
        Some((n, d)) if n > 0 && d > 0 && d % n == 0 => format!("1/{} s", d / n),
        Some((n, d)) if d > 0 => format!("{} s", n as f64 / d as f64),
        _ => v.to_string(),
    }
}

pub fn f_number(v: &Value) -> String {
    match ratio(v, 0) {
        Some(f) => format!("F{f:.1}"),
        None => v.to_string(),
    }
}

pub fn focal_length(v: &Value) -> String {
    match ratio(v, 0) {
        Some(mm) => format!("{mm:.1} mm"),
        None => v.to_string(),
    }
}

pub fn exposure_bias(v: &Value) -> String {
    match v.to_rational(0) {
        Some((0, _)) => "0 EV".into(),
        Some((n, d)) if d != 0 => format!("{:+.2} EV", n as f64 / d as f64),
        _ => v.to_string(),
    }
}

/// Undefined-typed version fields such as ExifVersion hold four ASCII
/// digits (`0231` renders as `2.31`).
pub fn version(v: &Value) -> String {
    let Value::Undefined(bytes) = v else {
        return v.to_string();
    };
    if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
        return v.to_string();
    }
    let text: String = bytes.iter().map(|&b| b as char).collect();
    let major = text[..2].trim_start_matches('0');
    let major = if major.is_empty() { "0" } else { major };
    format!("{major}.{}", &text[2..])
}

pub fn gps_coordinate(v: &Value) -> String {
    let (Some(deg), Some(min), Some(sec)) = (ratio(v, 0), ratio(v, 1), ratio(v, 2)) else {
        return v.to_string();
    };
    format!("{}deg {}' {:.2}\"", deg as i64, min as i64, sec)
}

pub fn gps_altitude(v: &Value) -> String {
    match ratio(v, 0) {
        Some(m) => format!("{m:.1} m"),
        None => v.to_string(),
    }
}

pub fn gps_time_stamp(v: &Value) -> String {
    let (Some(h), Some(m), Some(s)) = (ratio(v, 0), ratio(v, 1), ratio(v, 2)) else {
        return v.to_string();
    };
    format!("{:02}:{:02}:{:02}", h as u32, m as u32, s as u32)
}
