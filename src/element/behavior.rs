use crate::geometry::Converter;
use crate::scene::{BorderStroke, Placement, SceneBackend};
use crate::style::ComputedStyle;

/// What an element-specific hook may touch during its update.
pub struct VisualContext<'a, B: SceneBackend> {
    pub scene: &'a mut B,
    pub proxy: B::ProxyId,
    pub converter: &'a Converter,
}

/// Per element-type visual refresh, run after opacity is written and before
/// clipping planes are placed.
pub trait ElementBehavior<B: SceneBackend> {
    fn element_specific_update(&mut self, cx: &mut VisualContext<'_, B>, style: &ComputedStyle);
}

/// Mirrors geometry and opacity only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passive;

impl<B: SceneBackend> ElementBehavior<B> for Passive {
    fn element_specific_update(&mut self, _cx: &mut VisualContext<'_, B>, _style: &ComputedStyle) {}
}

/// A flat box: follows the element's rectangle and optionally its border.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panel {
    pub borders: bool,
    /// Replaces the computed border width and colour when set.
    pub custom_border: Option<BorderStroke>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_borders(mut self) -> Self {
        self.borders = true;
        self
    }

    pub fn with_custom_border(mut self, border: BorderStroke) -> Self {
        self.borders = true;
        self.custom_border = Some(border);
        self
    }
}

impl<B: SceneBackend> ElementBehavior<B> for Panel {
    fn element_specific_update(&mut self, cx: &mut VisualContext<'_, B>, style: &ComputedStyle) {
        cx.scene.set_placement(
            cx.proxy,
            Placement {
                position: cx.converter.xyz(),
                width: cx.converter.width(),
                height: cx.converter.height(),
            },
        );
        if self.borders {
            update_borders(cx.scene, cx.proxy, style, self.custom_border);
        }
    }
}

/// Copies border width and colour onto the proxy's outline.
///
/// A zero width hides the outline. A colour the style parser could not read
/// leaves the previous colour in place.
pub fn update_borders<B: SceneBackend>(
    scene: &mut B,
    proxy: B::ProxyId,
    style: &ComputedStyle,
    custom_border: Option<BorderStroke>,
) {
    let Some(material) = scene.material_mut(proxy) else {
        log::debug!(target: "dom2scene", "no material for {proxy:?}, border update skipped");
        return;
    };
    let border = material.border.get_or_insert_with(BorderStroke::default);

    let width = custom_border.map_or(style.border_width, |custom| custom.line_width);
    if width == 0.0 {
        border.visible = false;
    } else {
        border.visible = true;
        border.line_width = width;
        if let Some(color) = custom_border.map(|custom| custom.color).or(style.border_color) {
            border.set_color(color);
        }
    }

    material.mark_needs_update();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use crate::test_support::FakeScene;

    #[test]
    fn zero_width_hides_border() {
        let mut scene = FakeScene::default();
        let proxy = scene.spawn_materialized();
        let style = ComputedStyle {
            border_width: 0.0,
            border_color: Some(Color::rgb(9, 9, 9)),
            ..ComputedStyle::default()
        };
        update_borders(&mut scene, proxy, &style, None);
        let material = scene.material(proxy).expect("material");
        assert_eq!(material.border.map(|b| b.visible), Some(false));
        assert!(material.needs_update);
    }

    #[test]
    fn unreadable_color_keeps_previous_color() {
        let mut scene = FakeScene::default();
        let proxy = scene.spawn_materialized();
        let red = ComputedStyle {
            border_width: 2.0,
            border_color: Some(Color::rgb(255, 0, 0)),
            ..ComputedStyle::default()
        };
        update_borders(&mut scene, proxy, &red, None);

        let unreadable = ComputedStyle {
            border_width: 4.0,
            border_color: None,
            ..ComputedStyle::default()
        };
        update_borders(&mut scene, proxy, &unreadable, None);

        let border = scene.material(proxy).and_then(|m| m.border).expect("border");
        assert!(border.visible);
        assert_eq!(border.line_width, 4.0);
        assert_eq!(border.color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn custom_border_wins_over_style() {
        let mut scene = FakeScene::default();
        let proxy = scene.spawn_materialized();
        let custom = BorderStroke {
            visible: true,
            line_width: 1.5,
            color: Color::rgb(0, 0, 255),
            ..BorderStroke::default()
        };
        let style = ComputedStyle {
            border_width: 6.0,
            border_color: Some(Color::rgb(255, 0, 0)),
            ..ComputedStyle::default()
        };
        update_borders(&mut scene, proxy, &style, Some(custom));
        let border = scene.material(proxy).and_then(|m| m.border).expect("border");
        assert_eq!(border.line_width, 1.5);
        assert_eq!(border.color, Color::rgb(0, 0, 255));
        let [r, g, b, a] = border.linear_rgba;
        assert_eq!((r, g), (0.0, 0.0));
        assert!((b - 1.0).abs() < 1e-6);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn border_colour_is_stored_in_linear_light() {
        let mut scene = FakeScene::default();
        let proxy = scene.spawn_materialized();
        let style = ComputedStyle {
            border_width: 1.0,
            border_color: Some(Color::rgba(128, 0, 255, 51)),
            ..ComputedStyle::default()
        };
        update_borders(&mut scene, proxy, &style, None);

        let [r, g, b, a] = scene
            .material(proxy)
            .and_then(|m| m.border)
            .expect("border")
            .linear_rgba;
        assert!((r - 0.21586).abs() < 1e-4, "half-intensity red darkens in linear light, got {r}");
        assert_eq!(g, 0.0);
        assert!((b - 1.0).abs() < 1e-6);
        assert!((a - 0.2).abs() < 1e-6);
    }

    #[test]
    fn missing_material_is_skipped() {
        let mut scene = FakeScene::default();
        let proxy = scene.spawn();
        update_borders(&mut scene, proxy, &ComputedStyle::default(), None);
        assert!(scene.material(proxy).is_none());
    }
}
