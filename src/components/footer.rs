//! Public site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <a href="/" class="footer__logo">"CostaSuite"</a>
                    <p class="footer__tagline">
                        "Propiedades exclusivas en las mejores zonas costeras de México."
                    </p>
                </div>
                <nav class="footer__links">
                    <a href="/propiedades">"Propiedades"</a>
                    <a href="/contacto">"Contacto"</a>
                    <a href="/auth/login">"Portal de agentes"</a>
                </nav>
            </div>
            <p class="footer__copy">"© 2025 CostaSuite. Todos los derechos reservados."</p>
        </footer>
    }
}
