// ============================================================================
// USER TABLE - protected listing with column sort and username search
// ============================================================================

use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::Loader;
use crate::hooks::use_session;
use crate::models::{UserField, UserRecord};
use crate::services::ApiClient;
use crate::viewmodels::{settle_fetch, ListingAction, ListingViewModel};

impl Reducible for ListingViewModel {
    type Action = ListingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[function_component(UserTable)]
pub fn user_table() -> Html {
    let session = use_session();
    let listing = use_reducer(ListingViewModel::new);

    // Fetch once per token
    {
        let listing = listing.clone();
        let store = session.store.clone();
        use_effect_with(session.session.token.clone(), move |token| {
            if let Some(token) = token.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    let api = ApiClient::new();
                    let result = api.list_users(&token).await;
                    listing.dispatch(settle_fetch(&store, result));
                });
            }
            || ()
        });
    }

    let on_search = {
        let listing = listing.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            listing.dispatch(ListingAction::Filter(input.value()));
        })
    };

    if !listing.is_settled() {
        return html! { <Loader /> };
    }

    let directive = listing.directive();
    let headers = UserField::ALL.iter().map(|&field| {
        let onclick = {
            let listing = listing.clone();
            Callback::from(move |_: MouseEvent| listing.dispatch(ListingAction::SortBy(field)))
        };
        let active = directive.field == field;
        let (indicator, aria_sort) = if active {
            (directive.direction.indicator(), directive.direction.as_str())
        } else {
            ("", "none")
        };

        html! {
            <th key={field.key()} aria-sort={aria_sort}>
                <button type="button" class={classes!("sort-header", active.then_some("active"))} {onclick}>
                    {field.title()}{indicator}
                </button>
            </th>
        }
    });

    let rows = listing.visible().into_iter().map(render_row);

    html! {
        <main class="user-table">
            <div class="toolbar">
                <label for="user-search">{"Search users"}</label>
                <input
                    id="user-search"
                    type="search"
                    placeholder="Search users"
                    value={listing.filter().to_string()}
                    oninput={on_search}
                />
            </div>
            <table>
                <thead>
                    <tr>{ for headers }</tr>
                </thead>
                <tbody>
                    { for rows }
                </tbody>
            </table>
        </main>
    }
}

fn render_row(user: &UserRecord) -> Html {
    html! {
        <tr key={user.id.to_string()}>
            <td>{user.id}</td>
            <td>{user.username.clone()}</td>
            <td>{user.first_name.clone()}</td>
            <td>{user.last_name.clone()}</td>
            <td>{flag(user.is_active)}</td>
            <td>{user.last_login_label()}</td>
            <td>{flag(user.is_superuser)}</td>
        </tr>
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "✔"
    } else {
        "✖"
    }
}
