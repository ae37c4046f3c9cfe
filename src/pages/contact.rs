//! Public contact page. There is no contact endpoint yet; submission is
//! simulated locally and acknowledged with a toast.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::state::notify::NotifyState;

#[component]
pub fn ContactPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(1000)).await;
            notify.update(|n| n.success("¡Mensaje enviado! Te contactaremos pronto."));
            name.set(String::new());
            email.set(String::new());
            phone.set(String::new());
            message.set(String::new());
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notify;
            submitting.set(false);
        }
    });

    view! {
        <div class="page">
            <Navbar/>

            <main class="contact">
                <header class="contact__header">
                    <h1>"Contáctanos"</h1>
                    <p>"¿Tienes preguntas? Nuestro equipo está listo para ayudarte."</p>
                </header>

                <div class="contact__layout">
                    <div class="contact__info">
                        <p><strong>"Email: "</strong>"hola@costasuite.com"</p>
                        <p><strong>"Teléfono: "</strong>"+52 322 123 4567"</p>
                        <p><strong>"Oficina: "</strong>"Av. Costera 12, Puerto Vallarta, Jalisco"</p>
                    </div>

                    <form
                        class="contact__form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        <label>
                            "Nombre"
                            <input
                                type="text"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Email"
                            <input
                                type="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Teléfono"
                            <input
                                type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Mensaje"
                            <textarea
                                rows="5"
                                required
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Enviando..." } else { "Enviar Mensaje" }}
                        </button>
                    </form>
                </div>
            </main>

            <Footer/>
        </div>
    }
}
