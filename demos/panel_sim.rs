use anchor_overlay::{
    AnchorLocation, AnchorOverlayPanel, PanelCallbacks, PanelOptions, ParentContainer, Point, Size,
};

fn main() {
    // Example: an adapter driving a top-anchored panel without holding any UI objects.
    //
    // An adapter would:
    // - forward touch begin/move/end events in panel coordinates
    // - call tick(now_ms) in a frame loop while the panel is animating
    // - apply the returned height and center offset to the real view
    let mut parent = ParentContainer::new(Size::new(375.0, 667.0));

    let callbacks = PanelCallbacks::new()
        .with_on_will_expand(Some(|_: &AnchorOverlayPanel| println!("will expand")))
        .with_on_did_expand(Some(|p: &AnchorOverlayPanel| {
            println!("did expand: view_state={:?}", p.view_state())
        }))
        .with_on_will_shrink(Some(|_: &AnchorOverlayPanel| println!("will shrink")))
        .with_on_did_shrink(Some(|p: &AnchorOverlayPanel| {
            println!("did shrink: view_state={:?}", p.view_state())
        }));

    let mut panel = AnchorOverlayPanel::new(
        Size::new(355.0, 667.0),
        PanelOptions::new(AnchorLocation::Top)
            .with_height_bounds(28.0, 500.0)
            .with_callbacks(callbacks),
    );
    if let Err(err) = panel.attach_to(&mut parent) {
        eprintln!("attach failed: {err}");
        return;
    }
    let Some(constraints) = panel.constraints().copied() else {
        return;
    };
    println!("attached: frame={:?}", parent.resolve_frame(&constraints));

    // Pull the free (bottom) edge down by 120 units over a few frames.
    panel.drag_begin(&parent, &[Point::new(100.0, 20.0)]);
    for y in [40.0, 80.0, 140.0] {
        panel.drag_update(&mut parent, &[Point::new(100.0, y)]);
        println!(
            "drag y={y} height={:?} direction={:?}",
            panel.live_height(&parent),
            panel.slide_direction()
        );
    }

    let mut now_ms = 0u64;
    panel.drag_end(&mut parent, now_ms);
    run(&mut panel, &mut parent, &mut now_ms);

    // The owner reclaims the screen space, e.g. after a tap outside the panel.
    if panel.request_close(&mut parent, now_ms) {
        run(&mut panel, &mut parent, &mut now_ms);
    }

    println!(
        "done: frame={:?} phase={:?}",
        parent.resolve_frame(&constraints),
        panel.phase()
    );
}

fn run(panel: &mut AnchorOverlayPanel, parent: &mut ParentContainer, now_ms: &mut u64) {
    loop {
        *now_ms += 16;
        let Some(frame) = panel.tick(parent, *now_ms) else {
            break;
        };
        if *now_ms % 80 == 0 || frame.done {
            println!(
                "t={now_ms} height={:.1} center_offset={:.1}",
                frame.height, frame.center_offset
            );
        }
        if frame.done {
            break;
        }
    }
}
