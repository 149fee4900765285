use crate::{CellState, Error, Grid, Result, RuleSet};

/// Pattern parsed from RLE text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RlePattern {
    /// Exactly `x` by `y` cells as declared in the header.
    pub cells: Grid,
    /// Rule from the header, if any.
    pub rule: Option<RuleSet>,
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidPattern(msg.into())
}

/// Parses `x = W, y = H[, rule = ...]` into the sizes and the optional rule.
fn parse_header(line: &str) -> Result<(usize, usize, Option<RuleSet>)> {
    let (mut width, mut height, mut rule) = (None, None, None);
    for item in line.split(',') {
        let (key, value) = item
            .split_once('=')
            .ok_or_else(|| invalid(format!("malformed header item {:?}", item.trim())))?;
        let value = value.trim();
        let size = || {
            value
                .parse::<usize>()
                .map_err(|_| invalid(format!("bad size {value:?}")))
        };
        match key.trim() {
            "x" => width = Some(size()?),
            "y" => height = Some(size()?),
            "rule" => rule = Some(value.parse::<RuleSet>()?),
            _ => {}
        }
    }
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h, rule)),
        _ => Err(invalid("header must declare both x and y")),
    }
}

/// Parses a pattern in RLE format.
///
/// Comment lines start with `#`. Cells beyond the declared size are an error.
pub fn parse_rle(data: &[u8]) -> Result<RlePattern> {
    let text = std::str::from_utf8(data).map_err(|_| invalid("not UTF-8"))?;
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'));
    let header = lines.next().ok_or_else(|| invalid("missing header"))?;
    let (width, height, rule) = parse_header(header)?;
    let mut cells = Grid::new(width, height)
        .map_err(|_| invalid(format!("unusable pattern size {width}x{height}")))?;

    // run-length encoded pattern data
    let (mut x, mut y, mut cnt) = (0usize, 0usize, None::<usize>);
    'outer: for line in lines {
        for c in line.bytes() {
            if c.is_ascii_digit() {
                let digit = (c - b'0') as usize;
                let value = cnt
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .ok_or_else(|| invalid("run count overflow"))?;
                cnt = Some(value);
                continue;
            }
            if c.is_ascii_whitespace() {
                continue;
            }
            let n = cnt.take().unwrap_or(1);
            match c {
                b'o' => {
                    if x.saturating_add(n) > width || y >= height {
                        return Err(invalid(format!("row {y} exceeds the declared size")));
                    }
                    for i in 0..n {
                        cells.set(x + i, y, CellState::Alive)?;
                    }
                    x += n;
                }
                b'b' => {
                    x = x.saturating_add(n);
                    if x > width {
                        return Err(invalid(format!("row {y} exceeds the declared size")));
                    }
                }
                b'$' => {
                    (x, y) = (0, y.saturating_add(n));
                    if y > height {
                        return Err(invalid(format!("line {y} exceeds the declared size")));
                    }
                }
                b'!' => break 'outer,
                c => return Err(invalid(format!("unexpected symbol {:?}", c as char))),
            }
        }
    }
    Ok(RlePattern { cells, rule })
}
