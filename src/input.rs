use glam::Vec2;
use web_sys as web;

/// Convert viewport coordinates into coordinates local to a box whose
/// top-left corner sits at (`left`, `top`).
#[inline]
pub fn surface_point(client_x: f32, client_y: f32, left: f32, top: f32) -> Vec2 {
    Vec2::new(client_x - left, client_y - top)
}

/// First sample of a touch list, or `None` when no finger is down.
#[inline]
pub fn first_sample(samples: &[Vec2]) -> Option<Vec2> {
    samples.first().copied()
}

// ---------------- DOM event adapters ----------------
#[inline]
pub fn mouse_surface_point(ev: &web::MouseEvent, surface: &web::Element) -> Vec2 {
    let rect = surface.get_bounding_client_rect();
    surface_point(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
    )
}

/// Surface-local position of the first active touch; events carrying zero
/// touches produce nothing.
pub fn touch_surface_point(ev: &web::TouchEvent, surface: &web::Element) -> Option<Vec2> {
    let rect = surface.get_bounding_client_rect();
    let touches = ev.touches();
    let samples: Vec<Vec2> = (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| {
            surface_point(
                t.client_x() as f32,
                t.client_y() as f32,
                rect.left() as f32,
                rect.top() as f32,
            )
        })
        .collect();
    first_sample(&samples)
}

/// Screen x of the first changed touch (used for swipe detection).
#[inline]
pub fn changed_touch_screen_x(ev: &web::TouchEvent) -> Option<f32> {
    ev.changed_touches().get(0).map(|t| t.screen_x() as f32)
}
