use web_sys::MouseEvent;
use yew::prelude::*;

use super::asset_url;
use crate::model::{AssetHandle, ItemId, Point};
use crate::util::format_weight;

#[derive(Properties, PartialEq, Clone)]
pub struct ItemSpriteProps {
    pub id: ItemId,
    pub name: AttrValue,
    pub asset: AssetHandle,
    pub position: Point,
    pub size: f64,
    /// Drawn above the others while it is the item being weighed.
    pub lifted: bool,
    /// Shown under the artwork once the item has been guessed correctly.
    pub weight_label: Option<f64>,
    pub unit: AttrValue,
    pub on_grab: Callback<(ItemId, MouseEvent)>,
}

#[function_component(ItemSprite)]
pub fn item_sprite(props: &ItemSpriteProps) -> Html {
    let onmousedown = {
        let cb = props.on_grab.clone();
        let id = props.id;
        Callback::from(move |e: MouseEvent| cb.emit((id, e)))
    };
    let style = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; cursor:grab; z-index:{};",
        props.position.x,
        props.position.y,
        props.size,
        props.size,
        if props.lifted { 30 } else { 20 }
    );
    html! {
        <div {style} {onmousedown}>
            <img
                src={asset_url(&props.asset)}
                alt={props.name.clone()}
                draggable="false"
                style="width:100%; height:100%; object-fit:contain; user-select:none; pointer-events:none;"
            />
            if let Some(w) = props.weight_label {
                <div style="position:absolute; bottom:-32px; left:50%; transform:translateX(-50%); color:#fff; font-weight:700; font-size:18px; background:rgba(0,0,0,0.5); padding:4px 8px; border-radius:4px; white-space:nowrap;">
                    { format!("{} {}", format_weight(w), props.unit) }
                </div>
            }
        </div>
    }
}
