//! Wheel rendering component.

use wheel_core::{ItemList, LabelLayout, LabelPlacement, Palette, slices, wheel_background};
use yew::prelude::*;

use crate::hooks::use_element_width;

/// Width assumed for polar label placement until the wheel has been measured.
const FALLBACK_WHEEL_WIDTH: f64 = 400.0;

/// Easing for the spin; fast start, long slow finish.
const SPIN_EASING: &str = "cubic-bezier(0.15, 0.9, 0.3, 1)";

/// Properties for the Wheel component.
#[derive(Properties, PartialEq)]
pub struct WheelProps {
    pub items: ItemList,
    pub palette: Palette,
    pub layout: LabelLayout,
    /// Polar label distance as a fraction of the wheel radius.
    pub label_radius: f64,
    /// Absolute rotation in degrees.
    pub rotation: f64,
    /// Transition length; `None` snaps without animating.
    pub transition_ms: Option<u32>,
    #[prop_or_default]
    pub highlighted: Option<usize>,
}

/// Inline style for `#wheel-content`, the layer that carries the slices and
/// rotates. `#roulette-wheel` stays still and is only measured.
pub fn wheel_style(background: &str, rotation: f64, transition_ms: Option<u32>) -> String {
    let transition = match transition_ms {
        Some(ms) => format!("transform {ms}ms {SPIN_EASING}"),
        None => "none".to_string(),
    };
    format!("background: {background}; transform: rotate({rotation:.3}deg); transition: {transition};")
}

/// The wheel: a conic-gradient disc with one label per slice under a fixed pointer.
#[function_component(Wheel)]
pub fn wheel(props: &WheelProps) -> Html {
    let wheel_ref = use_node_ref();
    let measured = use_element_width(wheel_ref.clone());

    let slices = slices(props.items.len(), &props.palette);
    let style = wheel_style(&wheel_background(&slices), props.rotation, props.transition_ms);

    let wheel_radius = (if measured > 0.0 { measured } else { FALLBACK_WHEEL_WIDTH }) / 2.0;

    let layout_class = match props.layout {
        LabelLayout::Rotated => "layout-rotated",
        LabelLayout::Polar => "layout-polar",
    };

    html! {
        <div class="wheel-container">
            <div class="wheel-pointer" />
            <div id="roulette-wheel" ref={wheel_ref}>
                <div id="wheel-content" class={layout_class} style={style}>
                    { for slices.iter().zip(props.items.iter()).map(|(slice, label)| {
                        let placement = LabelPlacement::for_layout(
                            props.layout,
                            slice,
                            wheel_radius,
                            props.label_radius,
                        );
                        let is_winner = props.highlighted == Some(slice.index);
                        html! {
                            <div
                                key={slice.index.to_string()}
                                class={classes!("wheel-label", is_winner.then_some("winner"))}
                                style={placement.to_style()}
                            >
                                <span>{ label }</span>
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_wheel_style_while_spinning() {
        let style = wheel_style("red", 1845.5, Some(4000));
        assert_eq!(
            style,
            "background: red; transform: rotate(1845.500deg); transition: transform 4000ms cubic-bezier(0.15, 0.9, 0.3, 1);"
        );
    }

    #[wasm_bindgen_test]
    fn test_wheel_style_snaps_when_idle() {
        let style = wheel_style("red", 0.0, None);
        assert!(style.ends_with("transition: none;"));
        assert!(style.contains("rotate(0.000deg)"));
    }

    #[wasm_bindgen_test]
    async fn test_rotation_is_applied_to_wheel_content() {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let props = WheelProps {
            items: ItemList::new(["Lunch", "Dinner", "Snack"]),
            palette: Palette::default(),
            layout: LabelLayout::Rotated,
            label_radius: 0.65,
            rotation: 1980.0,
            transition_ms: Some(4000),
            highlighted: None,
        };
        let app = yew::Renderer::<Wheel>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let frame = root.query_selector("#roulette-wheel").unwrap().unwrap();
        let content = root.query_selector("#wheel-content").unwrap().unwrap();
        let style = content.get_attribute("style").unwrap();

        assert!(frame.get_attribute("style").is_none());
        assert!(style.contains("conic-gradient(#FF9A9E"));
        assert!(style.contains("rotate(1980.000deg)"));
        assert!(style.contains("transition: transform 4000ms"));

        app.destroy();
        root.remove();
    }
}
