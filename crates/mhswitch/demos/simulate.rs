//! Drive a switch through a tap, a drag and a cancelled touch, printing what
//! it paints.
//!
//! Run with `RUST_LOG=mhswitch=trace` to see state and gesture logging.

use mhswitch::{
    DrawCommand, Event, MouseButton, Point, Rect, RecordingCanvas, Switch, SwitchChanged,
    SwitchStyle, TouchId, Widget,
};

const FRAME: f64 = 1.0 / 60.0;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mhswitch=debug".into()),
        )
        .init();
}

fn deliver(switch: &mut Switch, event: &Event) {
    if let Some(changed) = switch
        .event(event)
        .and_then(|msg| msg.downcast::<SwitchChanged>().ok())
    {
        println!("  -> changed: on = {}", changed.on);
    }
}

fn settle(switch: &mut Switch) {
    let mut frames = 0;
    while switch.is_animating() {
        switch.event(&Event::AnimationFrame { dt: FRAME });
        frames += 1;
    }
    println!("  settled after {frames} frames at progress {:.2}", switch.progress());
}

fn dump(switch: &Switch) {
    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);
    for command in canvas.commands() {
        match command.unclipped() {
            DrawCommand::Rect { bounds, style, .. } => match (style.fill, style.stroke) {
                (Some(fill), _) => println!("  track  {bounds:?} fill {}", fill.to_hex()),
                (None, Some(stroke)) => println!("  border width {}", stroke.width),
                (None, None) => {}
            },
            DrawCommand::Circle { center, radius, style } => {
                let fill = style.fill.map(|c| c.to_hex()).unwrap_or_default();
                println!("  knob   at ({:.1}, {:.1}) r {radius} {fill}", center.x, center.y);
            }
            DrawCommand::Text { content, style, .. } => {
                println!("  label  {content:?} alpha {:.2}", style.color.a);
            }
            DrawCommand::Clip { .. } => {}
        }
    }
}

fn main() {
    init_logging();

    let style = SwitchStyle::from_yaml(
        r##"
on_text: "On"
off_text: "Off"
on_color: "#00ff00"
off_color: "#808080"
"##,
    )
    .unwrap_or_default();
    let mut switch = Switch::with_style(&style);
    let size = switch.measure(mhswitch::Constraints::unbounded());
    switch.layout(Rect::from_size(size));
    println!("measured {size:?}");
    dump(&switch);

    println!("tap:");
    let at = Point::new(20.0, 13.0);
    deliver(
        &mut switch,
        &Event::MouseDown {
            position: at,
            button: MouseButton::Left,
        },
    );
    deliver(
        &mut switch,
        &Event::MouseUp {
            position: at,
            button: MouseButton::Left,
        },
    );
    settle(&mut switch);
    dump(&switch);

    println!("drag back to off:");
    deliver(
        &mut switch,
        &Event::MouseDown {
            position: Point::new(60.0, 13.0),
            button: MouseButton::Left,
        },
    );
    for x in [50.0, 35.0, 15.0] {
        deliver(
            &mut switch,
            &Event::MouseMove {
                position: Point::new(x, 13.0),
            },
        );
        println!("  drag x {x}: on = {}", switch.is_on());
    }
    deliver(
        &mut switch,
        &Event::MouseUp {
            position: Point::new(15.0, 13.0),
            button: MouseButton::Left,
        },
    );
    settle(&mut switch);

    println!("cancelled touch:");
    let id = TouchId(1);
    deliver(
        &mut switch,
        &Event::TouchStart {
            id,
            position: Point::new(10.0, 13.0),
        },
    );
    deliver(
        &mut switch,
        &Event::TouchMove {
            id,
            position: Point::new(70.0, 13.0),
        },
    );
    println!("  mid-drag: on = {}", switch.is_on());
    deliver(&mut switch, &Event::TouchCancel { id });
    settle(&mut switch);
    dump(&switch);
}
