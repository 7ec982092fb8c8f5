//! Teklif formunun üçüncü taraf e-posta servisine (EmailJS) gönderimi.

use gloo_net::http::Request;
use serde::Serialize;

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const EMAILJS_SERVICE_ID: &str = "service_v50bpfi";
const EMAILJS_TEMPLATE_ID: &str = "template_44fm3kp";
const EMAILJS_PUBLIC_KEY: &str = "2LPInACVmsjayiX35";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Serialize)]
struct SendPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a QuoteRequest,
}

pub async fn send_quote(request: &QuoteRequest) -> Result<(), String> {
    let payload = SendPayload {
        service_id: EMAILJS_SERVICE_ID,
        template_id: EMAILJS_TEMPLATE_ID,
        user_id: EMAILJS_PUBLIC_KEY,
        template_params: request,
    };

    let response = Request::post(EMAILJS_ENDPOINT)
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_service_ids_and_form_fields() {
        let request = QuoteRequest {
            name: "Ayşe".into(),
            email: "ayse@example.com".into(),
            phone: "+90 555 000 00 00".into(),
            message: "Boru fiyatı".into(),
        };
        let payload = SendPayload {
            service_id: EMAILJS_SERVICE_ID,
            template_id: EMAILJS_TEMPLATE_ID,
            user_id: EMAILJS_PUBLIC_KEY,
            template_params: &request,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["service_id"], "service_v50bpfi");
        assert_eq!(value["template_params"]["email"], "ayse@example.com");
    }
}
