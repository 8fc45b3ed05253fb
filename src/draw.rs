use shared::ParticleField;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub fn draw_particles(
    context: &CanvasRenderingContext2d,
    field: &ParticleField,
    fill: &str,
) -> Result<(), JsValue> {
    context.clear_rect(0.0, 0.0, field.width(), field.height());
    context.set_fill_style_str(fill);

    for particle in field.particles() {
        context.begin_path();
        context.arc(
            particle.position.0,
            particle.position.1,
            particle.radius,
            0.0,
            std::f64::consts::TAU,
        )?;
        context.fill();
    }

    Ok(())
}
