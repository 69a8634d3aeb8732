use std::{fs, io, path::Path};

use crate::{CoordinateSet, Error, Result, node::City};

const EOF_MARKER: &str = "EOF";

/// Reads a TSPLIB-style coordinate file (`<id> <x> <y>` records up to `EOF`).
pub fn read_coordinates(path: &Path, max_nodes: usize) -> Result<CoordinateSet> {
    let text = fs::read_to_string(path).map_err(|e| {
        io::Error::new(e.kind(), format!("failed to read {}: {e}", path.display()))
    })?;
    let coords = parse_coordinates(&text, max_nodes)?;
    log::info!("input: path={} n={}", path.display(), coords.len());
    Ok(coords)
}

/// Parses coordinate records from `text`.
///
/// Reading stops at the first line starting with `EOF`. A record is a line of
/// exactly three tokens whose first token is all ASCII digits and whose other
/// two parse as numbers; every other line (headers, section names, blank
/// lines) is skipped. The id column is not checked for uniqueness or order.
pub fn parse_coordinates(text: &str, max_nodes: usize) -> Result<CoordinateSet> {
    let mut cities = Vec::new();
    let mut skipped = 0usize;

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.starts_with(EOF_MARKER) {
            break;
        }

        let Some(city) = parse_record(line) else {
            if !line.is_empty() {
                skipped += 1;
                log::trace!("input: skipped line={} text={line:?}", line_no + 1);
            }
            continue;
        };

        if cities.len() == max_nodes {
            return Err(Error::invalid_input(format!(
                "too many nodes: more than {max_nodes} records (line {}); raise --max-nodes",
                line_no + 1
            )));
        }
        cities.push(city);
    }

    log::debug!("input: records={} skipped={skipped}", cities.len());
    CoordinateSet::with_limit(cities, max_nodes)
}

fn parse_record(line: &str) -> Option<City> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [id, x, y] = tokens.as_slice() else {
        return None;
    };
    if !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(City::new(x.parse().ok()?, y.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::{parse_coordinates, read_coordinates};
    use crate::{Error, node::City};

    const SAMPLE: &str = "\
NAME: sample
TYPE: TSP
COMMENT: three cities
DIMENSION: 3
EDGE_WEIGHT_TYPE: EUC_2D
NODE_COORD_SECTION
   1 0.0 0.0
   2 10.0 0.0
   3 0 10
EOF
   4 99.0 99.0
";

    fn unique_temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("petal-tests-{name}-{nanos}"))
    }

    #[test]
    fn parse_coordinates_reads_records_until_eof() {
        let coords = parse_coordinates(SAMPLE, 200).expect("parse");
        assert_eq!(
            coords.cities(),
            &[
                City::new(0.0, 0.0),
                City::new(10.0, 0.0),
                City::new(0.0, 10.0)
            ]
        );
    }

    #[test]
    fn parse_coordinates_skips_malformed_lines() {
        let text = "1 1.0 2.0\nx 3.0 4.0\n2 5.0\n3 6.0 7.0 8.0\n-4 1.0 1.0\n5 abc 1.0\n6 9.5 -2.5\n";
        let coords = parse_coordinates(text, 200).expect("parse");
        assert_eq!(coords.cities(), &[City::new(1.0, 2.0), City::new(9.5, -2.5)]);
    }

    #[test]
    fn parse_coordinates_ignores_id_values() {
        let coords = parse_coordinates("7 1 1\n7 2 2\n1 3 3\n", 200).expect("parse");
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[2], City::new(3.0, 3.0));
    }

    #[test]
    fn parse_coordinates_accepts_empty_input() {
        let coords = parse_coordinates("NODE_COORD_SECTION\nEOF\n", 200).expect("parse");
        assert!(coords.is_empty());
    }

    #[test]
    fn parse_coordinates_rejects_more_than_max_nodes() {
        let err = parse_coordinates("1 0 0\n2 1 1\n3 2 2\n", 2).expect_err("too many");
        assert!(
            err.to_string()
                .contains("too many nodes: more than 2 records (line 3)")
        );
        assert_eq!(parse_coordinates("1 0 0\n2 1 1\n", 2).expect("at limit").len(), 2);
    }

    #[test]
    fn parse_coordinates_stops_at_eof_prefix() {
        let coords = parse_coordinates("1 0 0\nEOF trailing\n2 1 1\n", 200).expect("parse");
        assert_eq!(coords.len(), 1);
    }

    #[test]
    fn read_coordinates_reads_file_from_disk() {
        let dir = unique_temp_dir("input");
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("sample.tsp");
        fs::write(&path, SAMPLE).expect("write sample");

        let coords = read_coordinates(&path, 200).expect("read");
        assert_eq!(coords.len(), 3);

        fs::remove_dir_all(&dir).expect("cleanup temp dir");
    }

    #[test]
    fn read_coordinates_reports_missing_file() {
        let path = unique_temp_dir("missing").join("none.tsp");
        let err = read_coordinates(&path, 200).expect_err("missing file");
        assert!(err.to_string().contains("failed to read"));
        assert!(err.to_string().contains("none.tsp"));
        let Error::Io(io_err) = err else {
            panic!("expected an io error, got {err:?}");
        };
        assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
    }
}
