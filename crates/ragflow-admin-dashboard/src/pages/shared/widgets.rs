//! Small reusable view components
//!
//! Status badges, the notice banner, tab bars and labelled form controls.

use leptos::*;
use ragflow_admin_common::types::{BadgeTone, IndicatorTone};
use ragflow_admin_common::utils::{Choice, SliderRange};
use std::time::Duration;

/// Notice message with its success flag.
pub type Notice = RwSignal<Option<(String, bool)>>;

const NOTICE_TIMEOUT: Duration = Duration::from_secs(4);

/// Show a notice and clear it after a few seconds unless replaced.
pub fn flash(notice: Notice, message: impl Into<String>, success: bool) {
    let message = message.into();
    notice.set(Some((message.clone(), success)));
    set_timeout(
        move || {
            if notice.get_untracked().map(|(m, _)| m) == Some(message) {
                notice.set(None);
            }
        },
        NOTICE_TIMEOUT,
    );
}

/// Dismissible banner that replaces toast popups
#[component]
pub fn NoticeBanner(notice: Notice) -> impl IntoView {
    move || {
        notice.get().map(|(msg, is_success)| {
            view! {
                <div class=if is_success { "message success" } else { "message error" }>
                    <span>{msg}</span>
                    <button class="message-dismiss" on:click=move |_| notice.set(None)>"×"</button>
                </div>
            }
        })
    }
}

/// Coloured dot, optionally pulsing
#[component]
pub fn StatusIndicator(tone: IndicatorTone, #[prop(optional)] animated: bool) -> impl IntoView {
    let class = if animated {
        format!("status-dot {} pulse", tone.css_class())
    } else {
        format!("status-dot {}", tone.css_class())
    };
    view! { <span class=class></span> }
}

/// Status badge with its indicator dot
#[component]
pub fn StatusBadge(tone: BadgeTone, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class=format!("status-badge {}", tone.css_class())>
            <StatusIndicator tone=tone.indicator() animated=tone.animated() />
            {label}
        </span>
    }
}

/// Row of mutually exclusive tab buttons bound to one active key
#[component]
pub fn TabBar(tabs: Vec<(&'static str, &'static str)>, active: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="settings-tabs">
            {tabs.into_iter().map(|(key, label)| view! {
                <button
                    class=move || if active.get() == key { "tab-btn active" } else { "tab-btn" }
                    on:click=move |_| active.set(key.to_string())
                >{label}</button>
            }).collect_view()}
        </div>
    }
}

/// Labelled range input that snaps to its step
#[component]
pub fn SliderField(
    label: &'static str,
    range: SliderRange,
    value: Signal<f64>,
    #[prop(into)] on_change: Callback<f64>,
) -> impl IntoView {
    view! {
        <div class="form-group slider-field">
            <div class="slider-header">
                <label>{label}</label>
                <span class="slider-value">{move || range.format(value.get())}</span>
            </div>
            <input
                type="range"
                min=range.min
                max=range.max
                step=range.step
                prop:value=move || value.get()
                on:input=move |e| {
                    if let Ok(v) = event_target_value(&e).parse::<f64>() {
                        on_change.call(range.snap(v));
                    }
                }
            />
        </div>
    }
}

/// Labelled select over a fixed option list
#[component]
pub fn SelectField(
    label: &'static str,
    choices: &'static [Choice],
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                prop:value=move || value.get()
                on:change=move |e| on_change.call(event_target_value(&e))
            >
                {choices.iter().map(|c| view! {
                    <option value=c.value selected=move || value.get() == c.value>{c.label}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

/// Labelled on/off switch
#[component]
pub fn SwitchField(
    label: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="toggle-label switch-field">
            <div class="switch-text">
                <span>{label}</span>
                {description.map(|d| view! { <small class="form-hint">{d}</small> })}
            </div>
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |e| on_toggle.call(event_target_checked(&e))
            />
        </label>
    }
}
