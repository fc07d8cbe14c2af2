use std::path::Path;

use glam::Vec3;

use crate::types::{GridError, ObstacleRecord};

/// Read an obstacle file: comma-separated rows of
/// `x, y, z, half_x, half_y, half_z`, preceded by free-form header lines
/// (a geodetic home-position line, a column-name line).
pub fn load_obstacles(path: impl AsRef<Path>) -> Result<Vec<ObstacleRecord>, GridError> {
    let text = std::fs::read_to_string(path)?;
    parse_obstacles(&text)
}

/// Parse obstacle rows from text already in memory.
///
/// Leading lines that are not data rows are skipped as headers. After the
/// first data row every non-empty line must parse, so a truncated or
/// corrupt row surfaces as an error instead of silently shrinking the
/// obstacle set.
pub fn parse_obstacles(text: &str) -> Result<Vec<ObstacleRecord>, GridError> {
    let mut obstacles = Vec::new();
    let mut in_data = false;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_record(line) {
            Ok(record) => {
                in_data = true;
                obstacles.push(record);
            }
            Err(reason) if in_data => {
                return Err(GridError::InvalidRecord(format!(
                    "line {}: {reason}",
                    index + 1
                )));
            }
            // Still in the header.
            Err(_) => {}
        }
    }

    Ok(obstacles)
}

fn parse_record(line: &str) -> Result<ObstacleRecord, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 6 {
        return Err(format!("expected 6 fields, got {}", fields.len()));
    }

    let mut values = [0.0f32; 6];
    for (value, field) in values.iter_mut().zip(&fields) {
        let parsed: f32 = field
            .parse()
            .map_err(|_| format!("not a number: {field:?}"))?;
        if !parsed.is_finite() {
            return Err(format!("not finite: {field:?}"));
        }
        *value = parsed;
    }

    Ok(ObstacleRecord::new(
        Vec3::new(values[0], values[1], values[2]),
        Vec3::new(values[3], values[4], values[5]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
lat0 37.792480, lon0 -122.397450
posX,posY,posZ,halfSizeX,halfSizeY,halfSizeZ
-310.2389,-439.2315,85.5,5.0,5.0,85.5
-300.2389,-439.2315,85.5,5.0,5.0,85.5
";

    #[test]
    fn parses_rows_after_headers() {
        let obstacles = parse_obstacles(SAMPLE).unwrap();
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[0].center, Vec3::new(-310.2389, -439.2315, 85.5));
        assert_eq!(obstacles[0].half_extent, Vec3::new(5.0, 5.0, 85.5));
        assert_eq!(obstacles[1].center.x, -300.2389);
    }

    #[test]
    fn skips_empty_lines_between_rows() {
        let text = "x,y,z,hx,hy,hz\n1,2,3,4,5,6\n\n7,8,9,1,1,1\n";
        let obstacles = parse_obstacles(text).unwrap();
        assert_eq!(obstacles.len(), 2);
    }

    #[test]
    fn header_only_input_is_empty() {
        let text = "lat0 37.792480, lon0 -122.397450\nposX,posY,posZ\n";
        let obstacles = parse_obstacles(text).unwrap();
        assert!(obstacles.is_empty());
    }

    #[test]
    fn truncated_row_is_an_error() {
        let text = "posX,posY,posZ,halfSizeX,halfSizeY,halfSizeZ\n1,2,3,4,5,6\n1,2,3\n";
        let err = parse_obstacles(text).unwrap_err();
        match err {
            GridError::InvalidRecord(message) => {
                assert!(message.contains("line 3"), "unexpected message: {message}");
                assert!(message.contains("6 fields"), "unexpected message: {message}");
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_after_data_is_an_error() {
        let text = "1,2,3,4,5,6\n1,2,three,4,5,6\n";
        assert!(matches!(
            parse_obstacles(text),
            Err(GridError::InvalidRecord(_))
        ));
    }

    #[test]
    fn non_finite_field_is_an_error() {
        let text = "1,2,3,4,5,6\n1,2,NaN,4,5,6\n";
        assert!(matches!(
            parse_obstacles(text),
            Err(GridError::InvalidRecord(_))
        ));

        let text = "1,2,3,4,5,6\ninf,2,3,4,5,6\n";
        assert!(matches!(
            parse_obstacles(text),
            Err(GridError::InvalidRecord(_))
        ));
    }
}
