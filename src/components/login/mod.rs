//! MetaMask sign-in widget.
//!
//! Shows a round MetaMask button until an account is connected, then the
//! shortened address. Failures render as a single line under the row.

use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{CONNECTING_TOOLTIP, WALLET_REQUEST_TIMEOUT_MS, WALLET_TOOLTIP};
use crate::core::{Eip1193Provider, SharedProvider, request_account};
use crate::models::LoginState;

stylance::import_crate_style!(css, "src/components/login/login.module.css");

// ============================================================================
// Connect Handler
// ============================================================================

/// Run one connect attempt against `provider`.
///
/// Clicks while a request is pending are ignored. If the widget is gone by
/// the time the wallet answers, the answer is dropped.
fn connect(state: RwSignal<LoginState>, provider: SharedProvider) {
    if !state.try_update(|s| s.begin()).unwrap_or(false) {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = request_account(provider.as_ref()).await;
        if state.try_update(|s| s.finish(outcome)).is_none() {
            leptos::logging::log!("wallet answered after the login widget was removed");
        }
    });
}

// ============================================================================
// Widget
// ============================================================================

/// Sign-in row with the connect button or the connected address.
///
/// # Props
/// - `provider`: wallet to talk to. Defaults to the injected
///   `window.ethereum` with a request timeout.
#[component]
pub fn LoginWithMetaMask(#[prop(optional)] provider: Option<SharedProvider>) -> impl IntoView {
    let provider = StoredValue::new_local(provider.unwrap_or_else(|| {
        Rc::new(Eip1193Provider::with_timeout(WALLET_REQUEST_TIMEOUT_MS)) as SharedProvider
    }));
    let state = RwSignal::new(LoginState::default());

    // Derived signals
    let label = Signal::derive(move || state.with(|s| s.label()));
    let address = Memo::new(move |_| state.with(|s| s.display_address()));
    let error = Memo::new(move |_| state.with(|s| s.error_message()));
    let connecting = Signal::derive(move || state.with(|s| s.is_connecting()));
    let tooltip = Signal::derive(move || {
        if connecting.get() {
            CONNECTING_TOOLTIP
        } else {
            WALLET_TOOLTIP
        }
    });

    let on_connect = Callback::new(move |_: MouseEvent| connect(state, provider.get_value()));

    view! {
        <div class=css::container>
            <div class=css::row>
                <span class=css::label>{label}</span>

                {move || match address.get() {
                    Some(address) => view! {
                        <div class=css::badge>
                            <Icon icon=ic::CONNECTED />
                            <span>{address}</span>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <Tooltip content=tooltip>
                            <LoginButton on_click=on_connect disabled=connecting>
                                <MetaMaskIcon />
                            </LoginButton>
                        </Tooltip>
                    }
                    .into_any(),
                }}
            </div>

            {move || error.get().map(|message| view! {
                <div class=css::error>
                    <Icon icon=ic::ALERT />
                    <span>{message}</span>
                </div>
            })}
        </div>
    }
}

// ============================================================================
// Building Blocks
// ============================================================================

#[component]
fn LoginButton(
    on_click: Callback<MouseEvent>,
    #[prop(into)] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=css::button
            disabled=move || disabled.get()
            on:click=move |ev| on_click.run(ev)
        >
            {children()}
        </button>
    }
}

/// Hover tooltip above its children.
#[component]
fn Tooltip(#[prop(into)] content: Signal<&'static str>, children: Children) -> impl IntoView {
    view! {
        <div class=css::tooltipHost>
            {children()}
            <div class=css::tooltip>{content}</div>
        </div>
    }
}

#[component]
fn MetaMaskIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" class=css::icon>
            <path d="M21.8195 2L13.2195 8.2L14.9195 4.4L21.8195 2Z" fill="#E17726" />
            <path d="M2.17945 2L10.6795 8.2L9.07945 4.4L2.17945 2Z" fill="#E27625" />
            <path d="M18.8195 16.8L16.5195 20.4L21.4195 21.8L22.8195 16.8H18.8195Z" fill="#E27625" />
            <path d="M1.17945 16.8L2.57945 21.8L7.47945 20.4L5.17945 16.8H1.17945Z" fill="#E27625" />
            <path d="M7.27945 10.6L5.87945 12.6L10.6795 12.8L10.4795 7.6L7.27945 10.6Z" fill="#E27625" />
            <path d="M16.7195 10.6L13.4195 7.6L13.3195 12.8L18.1195 12.6L16.7195 10.6Z" fill="#E27625" />
            <path d="M7.47945 20.4L10.2795 19L7.87945 16.8L7.47945 20.4Z" fill="#E27625" />
            <path d="M13.7195 19L16.5195 20.4L16.1195 16.8L13.7195 19Z" fill="#E27625" />
        </svg>
    }
}
