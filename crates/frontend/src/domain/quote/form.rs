use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::quote::api::{send_quote, QuoteRequest};

/// Gönderim durumu. Üç panel (gönderiliyor / gönderildi / hata) birbirini
/// dışlar; gönder düğmesi yalnızca `Sending` sırasında devre dışıdır.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SendStatus {
    Idle,
    Sending,
    Sent,
    Failed,
}

#[component]
#[allow(non_snake_case)]
pub fn QuotePage() -> impl IntoView {
    view! {
        <section class="quote section">
            <div class="container">
                <h2 class="section-title">"Teklif İste"</h2>
                <QuoteForm />
            </div>
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn QuoteForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(SendStatus::Idle);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SendStatus::Sending {
            return;
        }
        set_status.set(SendStatus::Sending);

        let request = QuoteRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            message: message.get_untracked(),
        };
        spawn_local(async move {
            match send_quote(&request).await {
                Ok(()) => {
                    set_status.set(SendStatus::Sent);
                    // başarıda form temizlenir
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_phone.set(String::new());
                    set_message.set(String::new());
                }
                Err(e) => {
                    log::error!("teklif formu gönderilemedi: {}", e);
                    set_status.set(SendStatus::Failed);
                }
            }
        });
    };

    view! {
        <form id="quoteForm" class="quote-form" on:submit=submit>
            <input
                type="text"
                name="name"
                placeholder="Adınız"
                required
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="email"
                name="email"
                placeholder="E-posta"
                required
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="tel"
                name="phone"
                placeholder="Telefon"
                prop:value=move || phone.get()
                on:input=move |ev| set_phone.set(event_target_value(&ev))
            />
            <textarea
                name="message"
                placeholder="Mesajınız"
                required
                prop:value=move || message.get()
                on:input=move |ev| set_message.set(event_target_value(&ev))
            ></textarea>

            <div
                class="loading"
                style:display=move || if status.get() == SendStatus::Sending { "block" } else { "none" }
            >
                "Gönderiliyor..."
            </div>
            <div
                class="sent-message"
                style:display=move || if status.get() == SendStatus::Sent { "block" } else { "none" }
            >
                "Mesajınız gönderildi. Teşekkürler!"
            </div>
            <div
                class="error-message"
                style:display=move || if status.get() == SendStatus::Failed { "block" } else { "none" }
            >
                "Gönderim sırasında bir hata oluştu."
            </div>

            <button
                type="submit"
                class="submit-btn"
                disabled=move || status.get() == SendStatus::Sending
            >
                "Gönder"
            </button>
        </form>
    }
}
