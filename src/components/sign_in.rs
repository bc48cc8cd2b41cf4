use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{ErrorBanner, Loader};
use crate::hooks::use_session;
use crate::routing::Route;
use crate::stores::LoginOutcome;
use crate::viewmodels::{CredentialForm, FieldName, FieldState};

#[derive(Properties, PartialEq)]
pub struct SignInProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(SignIn)]
pub fn sign_in(props: &SignInProps) -> Html {
    let session = use_session();
    let form = use_state(CredentialForm::new);

    let on_edit = |name: FieldName| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.edit(name, input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let session = session.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if session.session.loading {
                return;
            }

            let mut next = (*form).clone();
            let credentials = next.submit();
            form.set(next);

            if let Some(credentials) = credentials {
                let on_navigate = on_navigate.clone();
                session.login(
                    credentials,
                    Callback::from(move |outcome: LoginOutcome| {
                        if let LoginOutcome::Authenticated { redirect } = outcome {
                            on_navigate.emit(redirect);
                        }
                    }),
                );
            }
        })
    };

    if session.session.loading {
        return html! { <Loader /> };
    }

    html! {
        <>
            <ErrorBanner error={session.session.last_error} />
            <main class="sign-in">
                <h1>{"Sign in"}</h1>
                <form class="sign-in-form" onsubmit={on_submit} novalidate=true>
                    { text_field(FieldName::Username, "Username", "text", "username", form.field(FieldName::Username), on_edit(FieldName::Username)) }
                    { text_field(FieldName::Password, "Password", "password", "current-password", form.field(FieldName::Password), on_edit(FieldName::Password)) }
                    <button type="submit" class="btn-primary" disabled={session.session.loading}>
                        {"Sign In"}
                    </button>
                </form>
            </main>
        </>
    }
}

fn text_field(
    name: FieldName,
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    state: &FieldState,
    oninput: Callback<InputEvent>,
) -> Html {
    let helper = state
        .error
        .map(|e| e.to_string())
        .unwrap_or_else(|| " ".to_string());

    html! {
        <div class={classes!("form-group", state.error.is_some().then_some("has-error"))}>
            <label for={name.as_str()}>{label}</label>
            <input
                id={name.as_str()}
                name={name.as_str()}
                type={input_type}
                autocomplete={autocomplete}
                value={state.value.clone()}
                aria-invalid={state.error.is_some().to_string()}
                {oninput}
            />
            <span class="helper-text">{helper}</span>
        </div>
    }
}
