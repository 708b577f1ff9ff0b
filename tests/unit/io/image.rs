//! Tests for PNG rasterization and export of layouts

#[cfg(test)]
mod tests {
    use gridmosaic::io::image::{export_layout_as_png, render_layout};
    use gridmosaic::layout::{GenerationParameters, MosaicLayout, Rgb, build_layout};
    use gridmosaic::sampling::{ActivationMask, CellState};

    fn layout(mask: &ActivationMask) -> MosaicLayout {
        let parameters = GenerationParameters {
            columns: mask.columns() as u32,
            rows: mask.rows() as u32,
            color: Rgb::new(1.0, 0.0, 0.0),
            cell_size: 4.0,
            density: 1.0,
        };
        let Ok(layout) = build_layout(&parameters, mask) else {
            unreachable!("layout of a matching mask should succeed");
        };
        layout
    }

    // Tests image size follows the grid extent
    // Verified by rendering one pixel per cell
    #[test]
    fn test_render_size() {
        let img = render_layout(&layout(&ActivationMask::filled(2, 3, CellState::INACTIVE)));

        assert_eq!(img.dimensions(), (12, 8));
    }

    // Tests lines are opaque gray and empty cells stay transparent
    // Verified by painting the container background
    #[test]
    fn test_render_lines_and_background() {
        let img = render_layout(&layout(&ActivationMask::filled(2, 2, CellState::INACTIVE)));

        assert_eq!(img.get_pixel(3, 0).0, [204, 204, 204, 255]);
        assert_eq!(img.get_pixel(0, 3).0, [204, 204, 204, 255]);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(7, 7).0[3], 0);
    }

    // Tests cells are painted in their color at their opacity
    // Verified by ignoring cell opacity
    #[test]
    fn test_render_cell_opacity() {
        let img = render_layout(&layout(&ActivationMask::filled(1, 1, CellState::active(1.0))));
        assert_eq!(img.get_pixel(2, 2).0, [255, 0, 0, 255]);

        let faint = render_layout(&layout(&ActivationMask::filled(1, 1, CellState::active(0.2))));
        let [red, _, _, alpha] = faint.get_pixel(2, 2).0;
        assert!((50..=52).contains(&alpha), "alpha was {alpha}");
        assert!(red >= 254, "red was {red}");
    }

    // Tests PNG file creation including missing parent directories
    // Verified by disabling file save operation
    #[test]
    fn test_export_creates_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be available");
        };
        let path = dir.path().join("nested").join("mosaic.png");
        let Some(path_str) = path.to_str() else {
            unreachable!("temporary paths are valid UTF-8");
        };

        let result = export_layout_as_png(
            &layout(&ActivationMask::filled(3, 3, CellState::active(0.5))),
            path_str,
        );

        assert!(result.is_ok(), "PNG export should succeed");
        assert!(path.exists(), "PNG file should be created");
        let reopened = image::open(&path);
        assert!(reopened.is_ok_and(|img| img.width() == 12 && img.height() == 12));
    }
}
