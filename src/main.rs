use fractal_zoomer::storage::save_png::save_png;
use fractal_zoomer::{
    ConsoleFramePresenter, ExplorerConfig, ExplorerController, ExplorerEvent, PpmFilePresenter,
};

const AUTO_ZOOM_FRAMES: u32 = 8;
const AUTO_ZOOM_FACTOR: f64 = 0.92;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ExplorerConfig::default();

    println!("Rendering {} set...", config.kind.display_name());
    println!("Image size: {}x{}", config.width, config.height);
    println!("Max iterations: {}", config.max_iterations);

    std::fs::create_dir_all("output")?;

    let mut controller = ExplorerController::new(
        config,
        ConsoleFramePresenter::new(),
        PpmFilePresenter::new(),
    );

    controller.render()?;
    controller.handle_event(ExplorerEvent::SaveRequested {
        path: "output/fractal.ppm".into(),
    })?;
    println!("Saved to output/fractal.ppm");

    for _ in 0..AUTO_ZOOM_FRAMES {
        controller.handle_event(ExplorerEvent::AutoZoomStep {
            factor: AUTO_ZOOM_FACTOR,
        })?;
    }

    controller.handle_event(ExplorerEvent::SaveRequested {
        path: "output/fractal_zoomed.ppm".into(),
    })?;
    println!("Saved to output/fractal_zoomed.ppm");

    if let Some(frame) = controller.last_frame() {
        save_png(&frame.pixel_buffer, "output/fractal_zoomed.png")?;
        println!("Saved to output/fractal_zoomed.png");
    }

    Ok(())
}
