//! HTML views for the dashboard.
//!
//! The views are pure functions of the user's identity and the record cache.

use maud::{Markup, html};

use crate::{
    dashboard::{
        RecordCache, UserIdentity,
        form::{CATEGORIES, RecordForm},
    },
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
    },
    record::{FinancialRecord, RecordId},
};

/// Whether the record form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum FormMode {
    Create,
    Edit(RecordId),
}

pub(super) fn dashboard_view(identity: &UserIdentity, cache: &RecordCache) -> Markup {
    let greeting = match &identity.first_name {
        Some(first_name) => format!("Welcome {first_name}! Here Are Your Finances:"),
        None => "Welcome! Here Are Your Finances:".to_owned(),
    };
    let form = record_form_view(FormMode::Create, &RecordForm::default(), "");

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-4" { (greeting) }

            (dashboard_content(cache, &form))
        }
    };

    base("Dashboard", &content)
}

/// The part of the dashboard that is swapped out after each change to the records.
pub(super) fn dashboard_content(cache: &RecordCache, form: &Markup) -> Markup {
    html! {
        div id="dashboard-content" class="w-full max-w-4xl space-y-6"
        {
            (form)

            p id="total" class="text-xl font-semibold" { (format_total(cache.total())) }

            (record_table_view(cache.records()))
        }
    }
}

pub(super) fn format_total(total: f64) -> String {
    format!("Total Monthly: ${total}")
}

pub(super) fn record_form_view(mode: FormMode, values: &RecordForm, error_message: &str) -> Markup {
    let (heading, submit_text) = match mode {
        FormMode::Create => ("Add Record", "Add Record"),
        FormMode::Edit(_) => ("Edit Record", "Save Changes"),
    };
    let update_endpoint = match mode {
        FormMode::Create => None,
        FormMode::Edit(record_id) => Some(endpoints::format_endpoint(
            endpoints::DASHBOARD_RECORD,
            record_id,
        )),
    };

    html! {
        form
            id="record-form"
            hx-post=[update_endpoint.is_none().then_some(endpoints::DASHBOARD_RECORDS)]
            hx-put=[update_endpoint.as_deref()]
            hx-target="#dashboard-content"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full max-w-md space-y-4"
        {
            h2 class="text-lg font-semibold" { (heading) }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="Description"
                    value=(values.description)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    id="amount"
                    type="number"
                    name="amount"
                    step="0.01"
                    placeholder="0.00"
                    value=(values.amount)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select id="category" name="category" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in CATEGORIES {
                        option value=(category) selected[values.category == category]
                        {
                            (category)
                        }
                    }
                }
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    id="date"
                    type="date"
                    name="date"
                    value=(values.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_text) }

            @if update_endpoint.is_some() {
                a href=(endpoints::DASHBOARD_VIEW) class=(BUTTON_SECONDARY_STYLE) { "Cancel" }
            }
        }
    }
}

fn record_table_view(records: &[FinancialRecord]) -> Markup {
    html! {
        table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @for record in records {
                    (record_row_view(record))
                }

                @if records.is_empty() {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td colspan="5" class=(TABLE_CELL_STYLE) { "No records yet." }
                    }
                }
            }
        }
    }
}

fn record_row_view(record: &FinancialRecord) -> Markup {
    let edit_endpoint = endpoints::format_endpoint(endpoints::DASHBOARD_EDIT_RECORD, record.id);
    let delete_endpoint = endpoints::format_endpoint(endpoints::DASHBOARD_RECORD, record.id);

    html! {
        tr class=(TABLE_ROW_STYLE) data-record-id=(record.id)
        {
            td class=(TABLE_CELL_STYLE) { (record.date.date()) }
            td class=(TABLE_CELL_STYLE) { (record.description) }
            td class=(TABLE_CELL_STYLE) { (record.category) }
            td class=(TABLE_CELL_STYLE) { (format_currency(record.amount)) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    button
                        type="button"
                        hx-get=(edit_endpoint)
                        hx-target="#record-form"
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                        class=(LINK_STYLE)
                    {
                        "Edit"
                    }

                    button
                        type="button"
                        hx-delete=(delete_endpoint)
                        hx-confirm={"Are you sure you want to delete '" (record.description) "'?"}
                        hx-target="#dashboard-content"
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}
