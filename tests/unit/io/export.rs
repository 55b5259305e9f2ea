//! Tests for exported path set documents

#[cfg(test)]
mod tests {
    use gridwalk::io::export::{ExportDocument, OutputFormat, write_document};
    use gridwalk::{Grid, PathSet, WalkConfig};

    fn sample_document() -> ExportDocument {
        let grid = Grid::default();
        let config = WalkConfig::new(10, 0.5, 1);
        let mut document = ExportDocument::new(&grid, config);
        // (0,0), (1,0), (0,1)
        document.push_set(7, &PathSet::new(vec![0, 1, 20], 1), &grid);
        document
    }

    // Tests groups are exported with cell coordinates and plane centers
    // Verified by exporting raw indices instead of coordinates
    #[test]
    fn test_export_set_groups() {
        let document = sample_document();
        let set = &document.sets[0];

        assert_eq!(set.seed, 7);
        assert_eq!((set.requested, set.produced), (3, 3));
        assert!(set.complete);

        let shapes: Vec<&str> = set.groups.iter().map(|g| g.shape).collect();
        assert_eq!(shapes, vec!["circle", "diamond", "triangle"]);
        assert_eq!(set.groups[1].cells, vec![[1, 0]]);
        assert_eq!(set.groups[2].cells, vec![[0, 1]]);
        assert_eq!(set.groups[2].points, vec![[10.0, 30.0]]);
    }

    // Tests partial sets report their shortfall and leave trailing groups empty
    // Verified by marking every set complete
    #[test]
    fn test_export_partial_set() {
        let grid = Grid::default();
        let mut document = ExportDocument::new(&grid, WalkConfig::default());
        document.push_set(1, &PathSet::new(vec![0, 1, 2, 3], 3), &grid);

        let set = &document.sets[0];
        assert!(!set.complete);
        assert_eq!((set.requested, set.produced), (9, 4));
        assert_eq!(set.groups[1].cells.len(), 1);
        assert!(set.groups[2].cells.is_empty());
    }

    // Tests the JSON document carries grid, config and sets
    // Verified by skipping the grid summary
    #[test]
    fn test_json_document() {
        let Ok(json) = sample_document().to_json() else {
            unreachable!("document should serialize");
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&json) else {
            unreachable!("output should be valid JSON");
        };

        assert_eq!(value["grid"]["cols"], 20);
        assert_eq!(value["grid"]["rows"], 12);
        assert_eq!(value["config"]["shape_count"], 1);
        assert_eq!(value["sets"][0]["groups"][0]["shape"], "circle");
        assert_eq!(value["sets"][0]["groups"][0]["points"][0][0], 10.0);
    }

    // Tests the text rendering lists one line per group
    // Verified by omitting the seed header
    #[test]
    fn test_text_document() {
        let text = sample_document().to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "# seed 7 (3/3 points)",
                "circle: (10.0, 10.0)",
                "diamond: (30.0, 10.0)",
                "triangle: (10.0, 30.0)",
            ]
        );
    }

    // Tests text lines of partial sets and multi-point groups
    // Verified by dropping the trailing newline of the last line
    #[test]
    fn test_text_partial_set() {
        let grid = Grid::default();
        let mut document = ExportDocument::new(&grid, WalkConfig::default());
        document.push_set(3, &PathSet::new(vec![0, 1, 2, 21], 3), &grid);

        let text = document.to_text();
        assert!(text.ends_with("triangle:\n"));
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec![
                "# seed 3 (4/9 points)",
                "circle: (10.0, 10.0) (30.0, 10.0) (50.0, 10.0)",
                "diamond: (30.0, 30.0)",
                "triangle:",
            ]
        );
    }

    // Tests an empty document renders no text
    // Verified by always appending a newline
    #[test]
    fn test_text_empty_document() {
        let document = ExportDocument::new(&Grid::default(), WalkConfig::default());
        assert!(document.to_text().is_empty());
    }

    // Tests JSON rendering ends with a newline
    // Verified by removing the trailing push
    #[test]
    fn test_render_json_newline() {
        let rendered = sample_document().render(OutputFormat::Json);
        assert!(rendered.is_ok_and(|json| json.ends_with("}\n")));
    }

    // Tests writing creates missing parent directories
    // Verified by removing create_dir_all
    #[test]
    fn test_write_document_creates_directories() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let path = dir.path().join("a").join("b").join("paths.txt");

        let result = write_document(&sample_document(), OutputFormat::Text, Some(&path));
        assert!(result.is_ok());
        let contents = std::fs::read_to_string(&path).unwrap_or_default();
        assert!(contents.starts_with("# seed 7"));
    }

    // Tests an unwritable destination reports a file system error
    // Verified by discarding the write result
    #[test]
    fn test_write_document_into_file_fails() {
        let Ok(file) = tempfile::NamedTempFile::new() else {
            unreachable!("temporary file should be creatable");
        };
        let path = file.path().join("paths.json");

        let result = write_document(&sample_document(), OutputFormat::Json, Some(&path));
        assert!(result.is_err());
    }
}
