//! Layout-template transform: rewrites named placeholders into a
//! positional format string with the pipeline's fixed field widths.
//!
//! Pure function, deliberately free of any dependency on `LogRecord` so it
//! can be unit-tested in complete isolation.

/// Field width applied to each placeholder once it is rewritten
/// positionally. `None` means unpadded (`%N:s`); `Some(w)` with `w >= 0`
/// left-pads to width `w` (`%N:ws`); negative widths right-pad (`%N:-ws`).
fn field_spec(name: &str) -> Option<&'static str> {
    match name {
        "timestamp" => Some(""),
        "threadid" => Some("8"),
        "loglevel" => Some("-7"),
        "message" => Some(""),
        "tag" => Some(""),
        _ => None,
    }
}

/// Rewrites a layout string using `{timestamp} {threadid} {loglevel}
/// {message} {tag}` placeholders into a positional format string. If
/// `layout` already contains `%s` or `%d`, it is assumed to already be in
/// positional form and is returned unchanged.
///
/// `zero_based_incremental`: when `true`, indices are assigned `0, 1, 2,
/// ...` in order of appearance in `layout`; when `false`, indices are
/// assigned by field identity (`timestamp`=0, `threadid`=1, `loglevel`=2,
/// `message`=3, `tag`=4), regardless of the order they appear in.
pub fn transform_layout(layout: &str, zero_based_incremental: bool) -> String {
    if layout.contains("%s") || layout.contains("%d") {
        return layout.to_string();
    }

    let fixed_index = |name: &str| -> usize {
        match name {
            "timestamp" => 0,
            "threadid" => 1,
            "loglevel" => 2,
            "message" => 3,
            "tag" => 4,
            _ => usize::MAX,
        }
    };

    let mut out = String::with_capacity(layout.len());
    let mut chars = layout.char_indices().peekable();
    let mut next_incremental_index = 0usize;

    while let Some((_, ch)) = chars.next() {
        if ch != '{' {
            out.push(ch);
            continue;
        }

        let rest = &layout[chars.peek().map(|(i, _)| *i).unwrap_or(layout.len())..];
        let Some(close) = rest.find('}') else {
            out.push(ch);
            continue;
        };
        let name = &rest[..close];
        let Some(width) = field_spec(name) else {
            out.push('{');
            out.push_str(name);
            out.push('}');
            for _ in 0..=close {
                chars.next();
            }
            continue;
        };

        let index = if zero_based_incremental {
            let idx = next_incremental_index;
            next_incremental_index += 1;
            idx
        } else {
            fixed_index(name)
        };

        out.push('%');
        out.push_str(&index.to_string());
        out.push(':');
        out.push_str(width);
        out.push('s');

        for _ in 0..=close {
            chars.next();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_positional_is_returned_unchanged() {
        let layout = "%0:s %1:8s";
        assert_eq!(transform_layout(layout, false), layout);
        let layout_d = "%d value";
        assert_eq!(transform_layout(layout_d, false), layout_d);
    }

    #[test]
    fn test_fixed_index_transform_matches_scenario() {
        let layout = "{timestamp} [TID {threadid}][{loglevel}] {message} [{tag}]";
        let expected = "%0:s [TID %1:8s][%2:-7s] %3:s [%4:s]";
        assert_eq!(transform_layout(layout, false), expected);
    }

    #[test]
    fn test_zero_based_incremental_transform() {
        let layout = "{tag} {message}";
        let expected = "%0:s %1:s";
        assert_eq!(transform_layout(layout, true), expected);
    }

    #[test]
    fn test_unknown_placeholder_is_left_alone() {
        let layout = "{timestamp} {nope}";
        let result = transform_layout(layout, false);
        assert!(result.contains("{nope}"));
        assert!(result.starts_with("%0:s"));
    }

    #[test]
    fn test_idempotent_on_transformed_output() {
        let layout = "{timestamp} {message}";
        let once = transform_layout(layout, false);
        let twice = transform_layout(&once, false);
        assert_eq!(once, twice);
    }
}
