use pano_tour::viewer::ViewerConfig;

// Expects an `assets/` directory in the working directory holding
// `data.json` and the panorama images it references.
fn main() {
    let config = ViewerConfig {
        title: "Show Flat".to_string(),
        ..ViewerConfig::default()
    };

    let _ = pano_tour::viewer::run(config);
}
