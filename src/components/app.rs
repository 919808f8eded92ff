use gloo::timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use super::{
    answer_input::AnswerInput, asset_url, item_sprite::ItemSprite, scale_view::ScaleView,
    toast::{ToastNotifier, ToastOverlay},
};
use crate::config::GameConfig;
use crate::model::{
    round_schedule, GameAction, GameState, Geometry, ItemId, Phase, Point, Rect, Round,
};
use crate::notify::{announce, ToastAction, ToastList};
use crate::util::{clog, set_debug_logging};

fn pointer_of(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.x(), r.y(), r.width(), r.height())
}

/// Page-space layout of the play area and scale; `None` until both are mounted.
fn measure(container: &NodeRef, scale: &NodeRef) -> Option<Geometry> {
    let container = container.cast::<Element>()?;
    let scale = scale.cast::<Element>()?;
    Some(Geometry {
        container: rect_of(&container),
        scale: rect_of(&scale),
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| {
        let cfg = GameConfig::load();
        set_debug_logging(cfg.debug_log);
        cfg
    });
    let game = {
        let config = config.clone();
        use_reducer(move || GameState::new(config))
    };
    let toasts = use_reducer(ToastList::default);
    let container_ref = use_node_ref();
    let scale_ref = use_node_ref();
    let input_ref = use_node_ref();

    // Global pointer listeners, registered once for the lifetime of the board
    {
        let dispatcher = game.dispatcher();
        let container_ref = container_ref.clone();
        let scale_ref = scale_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let mousemove_cb = {
                let dispatcher = dispatcher.clone();
                let container_ref = container_ref.clone();
                let scale_ref = scale_ref.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    dispatcher.dispatch(GameAction::DragMove {
                        pointer: pointer_of(&e),
                        geometry: measure(&container_ref, &scale_ref),
                    });
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                .ok();
            let mouseup_cb = {
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    dispatcher.dispatch(GameAction::DragEnd {
                        geometry: measure(&container_ref, &scale_ref),
                    });
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .ok();
            // Cleanup
            move || {
                let _ = window.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
            }
        });
    }

    // Timed edges of a round; a newer round tears these down before they fire
    {
        let dispatcher = game.dispatcher();
        let timing = config.timing;
        let round = game.session.round;
        use_effect_with(round, move |&round: &Round| {
            let mut timers = Vec::new();
            if round != Round::default() {
                for (delay, action) in round_schedule(timing, round) {
                    let dispatcher = dispatcher.clone();
                    timers.push(Timeout::new(delay, move || dispatcher.dispatch(action)));
                }
            }
            move || drop(timers)
        });
    }

    // Physical reset done: hand focus to the answer field if a reading is pending
    {
        let input_ref = input_ref.clone();
        let awaiting =
            game.session.phase == Phase::AwaitingAnswer && game.measured_weight().is_some();
        use_effect_with(game.resets, move |&resets| {
            if resets > 0 && awaiting {
                if let Some(input) = input_ref.cast::<HtmlElement>() {
                    let _ = input.focus();
                }
            }
            || ()
        });
    }

    // Report each judged answer
    {
        let notifier = ToastNotifier::new(toasts.dispatcher());
        let game = game.clone();
        use_effect_with(game.verdict_seq, move |&seq| {
            if seq > 0 {
                if let Some(verdict) = &game.last_verdict {
                    announce(&notifier, verdict, &game.config.unit, game.config.notify.options());
                }
            }
            || ()
        });
    }

    let on_grab = {
        let dispatcher = game.dispatcher();
        let container_ref = container_ref.clone();
        let scale_ref = scale_ref.clone();
        Callback::from(move |(id, e): (ItemId, MouseEvent)| {
            e.prevent_default();
            dispatcher.dispatch(GameAction::DragStart {
                id,
                pointer: pointer_of(&e),
                geometry: measure(&container_ref, &scale_ref),
            });
        })
    };
    let on_submit = {
        let dispatcher = game.dispatcher();
        Callback::from(move |raw: String| {
            clog(&format!("submit {:?}", raw));
            dispatcher.dispatch(GameAction::Submit { raw });
        })
    };
    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |action: ToastAction| dispatcher.dispatch(action))
    };

    let layout = config.layout;
    let active = game.active_item();
    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden; display:flex; flex-direction:column; align-items:center; justify-content:center;">
            <img
                src={asset_url(&config.assets.background)}
                alt="Market stall"
                width="1200"
                height="800"
                style="object-fit:contain; z-index:0;"
            />
            <div style="position:absolute; width:100%; height:100%; display:flex; justify-content:center; align-items:flex-start; padding-top:200px;">
                <div
                    ref={container_ref.clone()}
                    style={format!(
                        "position:relative; width:{}px; height:{}px;",
                        layout.container_width, layout.container_height
                    )}
                >
                    { for game.items.iter().map(|item| html! {
                        <ItemSprite
                            key={item.id.0}
                            id={item.id}
                            name={item.name.clone()}
                            asset={item.asset.clone()}
                            position={item.position}
                            size={layout.item_size}
                            lifted={active == Some(item.id)}
                            weight_label={game.is_weighed(item.id).then_some(item.weight)}
                            unit={config.unit.clone()}
                            on_grab={on_grab.clone()}
                        />
                    }) }
                    <ScaleView
                        node_ref={scale_ref.clone()}
                        width={layout.scale_width}
                        height={layout.scale_height}
                        pointer_angle={game.scale.pointer_angle}
                        is_animating={game.scale.is_animating}
                        assets={config.assets.clone()}
                    />
                </div>
            </div>
            <AnswerInput prompt={config.prompt.clone()} input_ref={input_ref.clone()} {on_submit} />
            <ToastOverlay toasts={toasts.toasts.clone()} {on_dismiss} />
        </div>
    }
}
