use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AnswerInputProps {
    pub prompt: AttrValue,
    pub input_ref: NodeRef,
    pub on_submit: Callback<String>,
}

#[function_component(AnswerInput)]
pub fn answer_input(props: &AnswerInputProps) -> Html {
    let onkeydown = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            // blank input stays put and is not reported
            if raw.trim().is_empty() {
                return;
            }
            input.set_value("");
            cb.emit(raw);
        })
    };
    html! {
        <div style="z-index:10; display:flex; gap:8px; padding:0 16px; align-items:center;">
            <h1 style="margin:15px 0 0 0; font-size:20px;">{ props.prompt.clone() }</h1>
            <input
                ref={props.input_ref.clone()}
                type="text"
                inputmode="decimal"
                {onkeydown}
                style="margin-top:12px; width:60px; height:30px; padding:6px 12px; font-size:18px; border-radius:8px; border:2px solid #30363d;"
            />
        </div>
    }
}
