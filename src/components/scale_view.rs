use yew::prelude::*;

use super::asset_url;
use crate::config::SceneAssets;

#[derive(Properties, PartialEq, Clone)]
pub struct ScaleViewProps {
    /// Measured on drop to hit-test items against the scale.
    pub node_ref: NodeRef,
    pub width: f64,
    pub height: f64,
    pub pointer_angle: f64,
    pub is_animating: bool,
    pub assets: SceneAssets,
}

#[function_component(ScaleView)]
pub fn scale_view(props: &ScaleViewProps) -> Html {
    let plate_shift = if props.is_animating { "translateY(16px)" } else { "translateY(0)" };
    html! {
        <div
            ref={props.node_ref.clone()}
            style={format!(
                "position:absolute; bottom:40px; right:80px; width:{}px; height:{}px; z-index:10;",
                props.width, props.height
            )}
        >
            <img
                src={asset_url(&props.assets.scale_base)}
                alt="scale base"
                draggable="false"
                style="position:absolute; width:110px; bottom:0; left:50%; transform:translateX(-50%); object-fit:contain;"
            />
            <div style={format!(
                "position:absolute; bottom:120px; left:50%; transform:translateX(-50%) {}; transition:transform 500ms;",
                plate_shift
            )}>
                <img src={asset_url(&props.assets.scale_plate)} alt="scale plate" width="100" height="50" draggable="false" />
            </div>
            <div style="position:absolute; bottom:40px; left:50%; transform:translateX(-50%); transform-origin:bottom;">
                <img
                    src={asset_url(&props.assets.scale_pointer)}
                    alt="pointer"
                    width="3"
                    height="60"
                    draggable="false"
                    style={format!(
                        "transform:rotate({}deg); transform-origin:bottom center; transition:transform 500ms;",
                        props.pointer_angle
                    )}
                />
            </div>
        </div>
    }
}
