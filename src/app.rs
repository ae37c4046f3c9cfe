//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::{
    contact::ContactPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    manage_properties::ManagePropertiesPage, manage_users::ManageUsersPage,
    my_properties::MyPropertiesPage, properties::PropertiesPage,
    property_detail::PropertyDetailPage,
};
use crate::state::notify::NotifyState;
use crate::state::session::{self, SessionState};
use crate::state::session_store::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, notification, and storage contexts, resolves the
/// persisted session exactly once, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let notify = RwSignal::new(NotifyState::default());
    let store = SessionStore::browser();

    provide_context(session);
    provide_context(notify);
    provide_context(store.clone());

    // One-shot hydration from storage; every route guard waits on this
    // before its first render decision.
    Effect::new(move || session::bootstrap(session, &store));

    view! {
        <Stylesheet id="leptos" href="/pkg/costasuite.css"/>
        <Title text="CostaSuite"/>

        <Router>
            <ToastStack/>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("propiedades") view=PropertiesPage/>
                <Route
                    path=(StaticSegment("propiedades"), ParamSegment("id"))
                    view=PropertyDetailPage
                />
                <Route path=StaticSegment("contacto") view=ContactPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("propiedades"))
                    view=ManagePropertiesPage
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("mis-propiedades"))
                    view=MyPropertiesPage
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("usuarios"))
                    view=ManageUsersPage
                />
            </Routes>
        </Router>
    }
}
