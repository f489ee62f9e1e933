//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use rim_auth::{Field, Route as AppRoute, route_for_session};

use crate::flow::{RegistrationFlow, SubmitOutcome};
use crate::frontend::api;
use crate::registration::RegistrationGateway;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path=AppRoute::Signup.path() view=SignupPage/>
                <Route path=AppRoute::Login.path() view=LoginPage/>
                <Route path=AppRoute::UserLanding.path() view=UserLandingPage/>
                <Route path=AppRoute::AdminDashboard.path() view=AdminDashboardPage/>
                <Route path=AppRoute::StoreDetails.path() view=StoreDetailsPage/>
                <Route path=AppRoute::Home.path() view=HomePage/>
            </Routes>
        </Router>
    }
}

/// One labelled input of the signup form, with its inline error.
#[component]
fn FormInput(
    flow: RwSignal<RegistrationFlow>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.name()>{label}</label>
            <input
                type=input_type
                id=field.name()
                name=field.name()
                prop:value=move || flow.with(|f| f.form().get(field).to_string())
                on:input=move |ev| {
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    let name = input.name();
                    flow.update(|f| {
                        if let Err(err) = f.edit_named(&name, input.value()) {
                            tracing::warn!(error = %err, "ignoring input event");
                        }
                    });
                }
                required
            />
            {move || {
                flow.with(|f| f.errors().get(field)).map(|err| {
                    view! { <span class="error-text">{err.to_string()}</span> }
                })
            }}
        </div>
    }
}

/// Account registration page.
#[component]
fn SignupPage() -> impl IntoView {
    let config = api::config();
    let flow = create_rw_signal(RegistrationFlow::new());
    let is_submitting = create_rw_signal(false);
    let navigate = use_navigate();

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let Some(form) = flow.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        is_submitting.set(true);
        let gateway = api::registration_gateway(&config);
        spawn_local(async move {
            let result = gateway.register(&form).await;
            if let Some(SubmitOutcome::Failed(message)) =
                flow.try_update(|f| f.complete_submit(result))
            {
                api::alert(&message);
            }
            is_submitting.set(false);
        });
    };

    let close_popup = move |_: ev::MouseEvent| {
        if let Some(route) = flow.try_update(|f| f.dismiss_popup()) {
            navigate(route.path(), Default::default());
        }
    };

    view! {
        <div class="signup-container">
            <div class="signup-form">
                <h3>"Welcome"</h3>
                <form on:submit=submit>
                    <FormInput flow=flow field=Field::Username label="User Name" input_type="text"/>
                    <FormInput flow=flow field=Field::Email label="Email" input_type="email"/>
                    <FormInput flow=flow field=Field::Password label="Password" input_type="password"/>
                    <FormInput
                        flow=flow
                        field=Field::ConfirmPassword
                        label="Confirm Password"
                        input_type="password"
                    />
                    <button type="submit" class="signup-button" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "Submitting..." } else { "Signup" }}
                    </button>
                </form>
                <p class="signup-link">
                    <A href=AppRoute::Login.path()>"Sign-in"</A>
                </p>
            </div>
        </div>

        <Show when=move || flow.with(|f| f.popup_visible())>
            <div class="popup-overlay">
                <div class="popup">
                    <h3>"Registration Successful"</h3>
                    <p>"Your account has been successfully created."</p>
                    <button on:click=close_popup.clone() class="popup-button">"OK"</button>
                </div>
            </div>
        </Show>
    }
}

/// Landing page for signed-in users: dispatches on the stored role once, on mount.
#[component]
fn UserLandingPage() -> impl IntoView {
    let config = api::config();
    let navigate = use_navigate();

    // No signals are read inside, so this runs exactly once per mount.
    create_effect(move |_| {
        let session = api::stored_session(&config);
        let route = route_for_session(session.as_ref());
        tracing::info!(%route, "landing dispatch");
        navigate(route.path(), Default::default());
    });

    view! {
        <div class="app">
            <p>"Loading..."</p>
        </div>
    }
}

#[component]
fn LoginPage() -> impl IntoView {
    view! {
        <div class="app">
            <h1>"Sign in"</h1>
            <A href=AppRoute::Signup.path()>"Create an account"</A>
        </div>
    }
}

#[component]
fn AdminDashboardPage() -> impl IntoView {
    view! {
        <div class="app">
            <h1>"Enterprise AI"</h1>
        </div>
    }
}

#[component]
fn StoreDetailsPage() -> impl IntoView {
    view! {
        <div class="app">
            <h1>"Store Details"</h1>
        </div>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="app">
            <h1>"Home"</h1>
            <A href=AppRoute::UserLanding.path()>"Continue"</A>
        </div>
    }
}
