pub mod login_form;
pub mod onboarding;
pub mod signup_form;

use yew::prelude::*;

/// Inline style for a panel container.
fn panel_style(visible: bool) -> &'static str {
    if visible {
        "display: block"
    } else {
        "display: none"
    }
}

fn spinner_class(busy: bool) -> Classes {
    classes!("spinner", busy.then_some("show"))
}

fn link_class(base: &'static str, enabled: bool) -> Classes {
    classes!(base, (!enabled).then_some("disabled"))
}

/// Click handler for a panel-switch link: never follow the href.
fn link_callback(on_switch: &Callback<()>) -> Callback<MouseEvent> {
    let on_switch = on_switch.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_switch.emit(());
    })
}

fn submit_callback(on_submit: &Callback<()>) -> Callback<SubmitEvent> {
    let on_submit = on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit(());
    })
}
