use api::ApiError;
use dioxus::prelude::*;
use store::{ExpenseForm, FieldErrors, Frequency, RepeatOption, Text};

use crate::components::{Button, Card, FieldError, Input, Label};
use crate::icons::{FaBolt, FaCalendar, FaDollarSign, FaLayerGroup, FaRepeat};
use crate::{use_backend, use_language, Icon};

use super::{page_title, SidebarLayout};

fn repeat_label(option: RepeatOption) -> Text {
    match option {
        RepeatOption::DoNotRepeat => Text::DoNotRepeat,
        RepeatOption::Always => Text::Always,
        RepeatOption::Installments => Text::Installments,
    }
}

fn frequency_label(frequency: Frequency) -> Text {
    match frequency {
        Frequency::Monthly => Text::Monthly,
        Frequency::SemiAnnually => Text::SemiAnnually,
        Frequency::Annually => Text::Annually,
    }
}

fn repeat_icon(option: RepeatOption) -> Element {
    match option {
        RepeatOption::DoNotRepeat => rsx! { Icon { icon: FaBolt, width: 16, height: 16 } },
        RepeatOption::Always => rsx! { Icon { icon: FaRepeat, width: 16, height: 16 } },
        RepeatOption::Installments => rsx! { Icon { icon: FaLayerGroup, width: 16, height: 16 } },
    }
}

/// New-expense form. The frequency and installment-count inputs only exist
/// while "Installments" is selected, and only then are they submitted.
#[component]
pub fn ExpenseCreate() -> Element {
    let backend = use_backend();
    let language = use_language();
    let mut form = use_signal(ExpenseForm::default);
    let t = move |key: Text| language.text(key);
    let title = page_title(t(Text::CreateExpense));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(expense) = form.write().begin_submit() else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let result = backend.create_expense(&expense).await;
            match &result {
                Ok(()) => tracing::info!("Expense saved ({})", expense.repeat.option()),
                Err(e) => tracing::info!("Expense rejected: {e}"),
            }
            form.write().complete(result.map_err(ApiError::into_field_errors));
        });
    };

    let current = form();
    let draft = &current.draft;
    let processing = current.status.processing;
    let error = |field: &str| current.status.error(field).map(str::to_string);
    let selected_frequency = draft.frequency.map(Frequency::as_str).unwrap_or_default();

    rsx! {
        document::Title { "{title}" }
        SidebarLayout {
            header: rsx! {
                h1 { class: "page-title", "{t(Text::CreateExpense)}" }
            },
            Card { class: "form-card", title: t(Text::CreateExpense).to_string(),
                form { onsubmit: handle_submit,
                    div { class: "form-fields",
                        div { class: "form-field",
                            Label { html_for: "amount", "{t(Text::Amount)}" }
                            div { class: "input-with-icon",
                                Icon { icon: FaDollarSign, width: 14, height: 14 }
                                Input {
                                    id: "amount",
                                    r#type: "number",
                                    step: "0.01",
                                    placeholder: "0.00",
                                    required: true,
                                    value: draft.amount.clone(),
                                    oninput: move |evt: FormEvent| {
                                        let value = evt.value();
                                        form.write().edit(move |d| d.amount = value);
                                    },
                                }
                            }
                            FieldError { message: error("amount") }
                        }
                        div { class: "form-field",
                            Label { html_for: "description", "{t(Text::Description)}" }
                            textarea {
                                class: "input textarea",
                                id: "description",
                                placeholder: t(Text::Description),
                                required: true,
                                value: draft.description.clone(),
                                oninput: move |evt: FormEvent| {
                                    let value = evt.value();
                                    form.write().edit(move |d| d.description = value);
                                },
                            }
                            FieldError { message: error("description") }
                        }
                        div { class: "form-field",
                            Label { html_for: "expirationDate", "{t(Text::ExpirationDate)}" }
                            div { class: "input-with-icon",
                                Icon { icon: FaCalendar, width: 14, height: 14 }
                                Input {
                                    id: "expirationDate",
                                    r#type: "date",
                                    required: true,
                                    value: draft.expiration_date.clone(),
                                    oninput: move |evt: FormEvent| {
                                        let value = evt.value();
                                        form.write().edit(move |d| d.expiration_date = value);
                                    },
                                }
                            }
                            FieldError { message: error("expirationDate") }
                        }
                        fieldset { class: "form-field",
                            legend { class: "label", "{t(Text::RepeatOptions)}" }
                            div { class: "radio-group", role: "radiogroup",
                                for choice in RepeatOption::ALL {
                                    label {
                                        key: "{choice}",
                                        class: if draft.repeat_option == choice { "radio-option radio-option--checked" } else { "radio-option" },
                                        input {
                                            r#type: "radio",
                                            name: "repeatOption",
                                            value: choice.as_str(),
                                            checked: draft.repeat_option == choice,
                                            onchange: move |_| form.write().edit(|d| d.repeat_option = choice),
                                        }
                                        {repeat_icon(choice)}
                                        span { "{t(repeat_label(choice))}" }
                                    }
                                }
                            }
                            FieldError { message: error("repeatOption") }
                        }
                        div {
                            class: if draft.shows_installment_fields() { "reveal reveal--open" } else { "reveal" },
                            if draft.shows_installment_fields() {
                                div { class: "form-field",
                                    Label { html_for: "frequency", "{t(Text::Frequency)}" }
                                    select {
                                        class: "input select",
                                        id: "frequency",
                                        value: selected_frequency,
                                        onchange: move |evt: FormEvent| {
                                            let frequency = evt.value().parse::<Frequency>().ok();
                                            form.write().edit(move |d| d.frequency = frequency);
                                        },
                                        option { value: "", disabled: true, selected: selected_frequency.is_empty(),
                                            "{t(Text::Frequency)}"
                                        }
                                        for frequency in Frequency::ALL {
                                            option {
                                                key: "{frequency}",
                                                value: frequency.as_str(),
                                                selected: draft.frequency == Some(frequency),
                                                "{t(frequency_label(frequency))}"
                                            }
                                        }
                                    }
                                    FieldError { message: error("frequency") }
                                }
                                div { class: "form-field",
                                    Label { html_for: "numberOfInstallments", "{t(Text::NumberOfInstallments)}" }
                                    Input {
                                        id: "numberOfInstallments",
                                        r#type: "number",
                                        min: "1",
                                        placeholder: t(Text::NumberOfInstallments).to_string(),
                                        value: draft.number_of_installments.clone(),
                                        oninput: move |evt: FormEvent| {
                                            let value = evt.value();
                                            form.write().edit(move |d| d.number_of_installments = value);
                                        },
                                    }
                                    FieldError { message: error("numberOfInstallments") }
                                }
                            }
                        }
                        FieldError { message: error(FieldErrors::FORM) }
                        if current.saved {
                            p { class: "notice notice--success", role: "status", "{t(Text::ExpenseSaved)}" }
                        }
                        Button { r#type: "submit", class: "btn-block", disabled: processing,
                            if processing {
                                "{t(Text::Submitting)}"
                            } else {
                                "{t(Text::SubmitExpense)}"
                            }
                        }
                    }
                }
            }
        }
    }
}
