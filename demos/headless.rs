use std::rc::Rc;

use zoomlet::{
    AttachParams, ControllerRegistry, FixedElement, HostElement, InputEvent, Point, Rect,
    StyleProperty, WheelDelta,
};

/// Example of driving zoomlet headlessly, without any UI: in-memory host
/// elements stand in for real document nodes.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("zoomlet headless example");
    println!("=======================");

    // An 800x600 image filling an 800x600 container
    let container = FixedElement::new("container", Rect::from_size(800.0, 600.0));
    let image = FixedElement::child_of(&container, "photo", Rect::from_size(800.0, 600.0), 600.0);

    let mut registry = ControllerRegistry::new();
    registry.attach(
        AttachParams::new(image.clone() as Rc<dyn HostElement>)
            .on_zoom_in(|| println!("   -> zoomed in from identity"))
            .on_zoom_out(|| println!("   -> back at identity")),
    )?;

    println!("attached '{}':", image.id());
    println!("   cursor style: {:?}", image.style(StyleProperty::Cursor));

    // Zoom in with three wheel ticks anchored near the top-left
    println!("\nwheel in, anchored at (200, 150):");
    registry.with_controller_mut("photo", |controller| {
        for _ in 0..3 {
            controller.handle_input(InputEvent::Wheel {
                delta: WheelDelta::Standard { delta: 120.0 },
                position: Point::new(200.0, 150.0),
            });
            println!(
                "   zoom {:.1}  translate ({:.0}, {:.0})  state {:?}",
                controller.zoom_factor(),
                controller.translate().x,
                controller.translate().y,
                controller.state()
            );
        }
    });

    // Pan with a drag
    println!("\ndrag from (400, 300) to (340, 360):");
    registry.with_controller_mut("photo", |controller| {
        controller.handle_input(InputEvent::PointerDown {
            position: Point::new(400.0, 300.0),
        });
        controller.handle_input(InputEvent::PointerMove {
            position: Point::new(340.0, 360.0),
        });
        controller.handle_input(InputEvent::PointerUp);
        println!(
            "   translate ({:.0}, {:.0})  rendered: {}",
            controller.translate().x,
            controller.translate().y,
            controller.transform().to_css()
        );
    });

    println!(
        "\ninline transform on the element: {:?}",
        image.style(StyleProperty::Transform)
    );

    // Declared-but-unsupported contract points report themselves as such
    if let Err(err) = registry.resize() {
        println!("resize: {err}");
    }

    registry.detach(None);
    println!(
        "detached; injected styles left on element: {}",
        image.style_count()
    );

    Ok(())
}
