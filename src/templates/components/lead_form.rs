use crate::domain::lead::LeadKind;
use maud::{html, Markup};

pub fn lead_form(kind: LeadKind, property_id: Option<&str>) -> Markup {
    let (action, heading, submit) = match kind {
        LeadKind::Contact => ("/contacto", "Agenda una visita", "Enviar mensaje"),
        LeadKind::Valuation => ("/tasacion", "Tasación gratuita", "Solicitar tasación"),
    };
    let result_id = format!("lead-result-{}", kind.as_str());

    html! {
        div class="lead-wrapper" {
            h3 { (heading) }
            form
                class="lead-form"
                method="post"
                action=(action)
                hx-post=(action)
                hx-target=(format!("#{result_id}"))
                hx-swap="innerHTML"
                hx-disabled-elt="button"
            {
                @if let Some(id) = property_id {
                    input type="hidden" name="property_id" value=(id);
                }
                label for=(format!("{}-name", kind.as_str())) { "Nombre" }
                input type="text" id=(format!("{}-name", kind.as_str())) name="name" autocomplete="name" required;
                label for=(format!("{}-email", kind.as_str())) { "Correo" }
                input type="email" id=(format!("{}-email", kind.as_str())) name="email" autocomplete="email" required;
                label for=(format!("{}-phone", kind.as_str())) { "Teléfono" }
                input type="tel" id=(format!("{}-phone", kind.as_str())) name="phone" autocomplete="tel" required;
                label for=(format!("{}-message", kind.as_str())) { "Mensaje" }
                textarea id=(format!("{}-message", kind.as_str())) name="message" rows="3" {}

                // Bots fill every field; people never see this one.
                input type="text" class="honeypot" name="company" tabindex="-1" autocomplete="off" aria-hidden="true";

                button type="submit" class="btn btn-primary" { (submit) }
            }
            div id=(result_id) {}
        }
    }
}

/// htmx swap target content after a submission.
pub fn lead_result(ok: bool, message: &str) -> Markup {
    html! {
        @if ok {
            p class="lead-success" role="status" { (message) }
        } @else {
            p class="lead-error" role="alert" { (message) }
        }
    }
}
