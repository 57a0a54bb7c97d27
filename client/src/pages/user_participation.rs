//! Participant view of one group's weeks, with inline weekly-record editing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route: `/user/semester/:semesterId/group/:groupId/participations`.
//! Saving goes through `PUT /user/participations/{id}/record`, which creates
//! the record on first save. The list is re-fetched after every save.

#[cfg(test)]
#[path = "user_participation_test.rs"]
mod user_participation_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::api::participant;
use crate::net::types::{UserParticipation, WeeklyRecord};
use crate::routes;
use crate::state::session::use_session;

/// Service attendance as the backend spells it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Attendance {
    OnTime,
    Late,
    #[default]
    Absent,
}

impl Attendance {
    pub const ALL: [Self; 3] = [Self::OnTime, Self::Late, Self::Absent];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnTime => "ontime",
            Self::Late => "late",
            Self::Absent => "absent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OnTime => "On Time",
            Self::Late => "Late",
            Self::Absent => "Absent",
        }
    }

    /// Unknown or missing values read as absent.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("ontime") => Self::OnTime,
            Some("late") => Self::Late,
            _ => Self::Absent,
        }
    }
}

/// Editable copy of a weekly record; numeric fields hold raw input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordForm {
    pub record_id: Option<i64>,
    pub week_number: String,
    pub service1: Attendance,
    pub service2: Attendance,
    pub summary1: bool,
    pub summary2: bool,
    pub qt: String,
    pub reading: String,
    pub pray: String,
    pub memorize: String,
    pub submitted_date: String,
}

impl RecordForm {
    /// First-time entry for a week that has no record yet.
    pub fn blank(today: &str) -> Self {
        Self {
            record_id: None,
            week_number: "1".to_owned(),
            service1: Attendance::Absent,
            service2: Attendance::Absent,
            summary1: false,
            summary2: false,
            qt: "0".to_owned(),
            reading: "0".to_owned(),
            pray: "0".to_owned(),
            memorize: "0".to_owned(),
            submitted_date: today.to_owned(),
        }
    }

    pub fn from_record(record: &WeeklyRecord, today: &str) -> Self {
        let count = |value: Option<i32>| value.unwrap_or(0).to_string();
        Self {
            record_id: record.record_id,
            week_number: record.week_number.unwrap_or(1).to_string(),
            service1: Attendance::parse(record.service1.as_deref()),
            service2: Attendance::parse(record.service2.as_deref()),
            summary1: record.summary1,
            summary2: record.summary2,
            qt: count(record.qt),
            reading: count(record.reading),
            pray: count(record.pray),
            memorize: count(record.memorize),
            submitted_date: record.submitted_date.clone().unwrap_or_else(|| today.to_owned()),
        }
    }

    /// Validate and convert for the wire.
    ///
    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn to_record(&self) -> Result<WeeklyRecord, String> {
        let week = parse_count("Week number", &self.week_number)?;
        if week < 1 {
            return Err("Week number must be at least 1.".to_owned());
        }
        let date = self.submitted_date.trim();
        Ok(WeeklyRecord {
            record_id: self.record_id,
            week_number: Some(week),
            service1: Some(self.service1.as_str().to_owned()),
            service2: Some(self.service2.as_str().to_owned()),
            summary1: self.summary1,
            summary2: self.summary2,
            qt: Some(parse_count("QT", &self.qt)?),
            reading: Some(parse_count("Reading", &self.reading)?),
            pray: Some(parse_count("Prayer", &self.pray)?),
            memorize: Some(parse_count("Memorization", &self.memorize)?),
            submitted_date: (!date.is_empty()).then(|| date.to_owned()),
        })
    }
}

/// Non-negative integer input; blank counts as zero.
pub fn parse_count(field: &str, raw: &str) -> Result<i32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    match raw.parse::<i32>() {
        Ok(value) if value >= 0 => Ok(value),
        _ => Err(format!("{field} must be a whole number of zero or more.")),
    }
}

/// `YYYY-MM-DD` in the browser's clock; empty off-browser.
fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.get(..10).unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

fn route_id(raw: Option<String>) -> Option<i64> {
    raw?.parse().ok()
}

#[component]
pub fn UserParticipationPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let semester_id = Memo::new(move |_| route_id(params.read().get("semesterId")));
    let group_id = Memo::new(move |_| route_id(params.read().get("groupId")));

    let rows = RwSignal::new(Vec::<UserParticipation>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<(i64, RecordForm)>);
    let reload = RwSignal::new(0_u32);

    let fetch_session = session.clone();
    Effect::new(move || {
        reload.track();
        let (Some(semester), Some(group)) = (semester_id.get(), group_id.get()) else {
            error.set("Invalid semester or group.".to_owned());
            loading.set(false);
            return;
        };
        let Some(person) = fetch_session.user.id() else {
            error.set("Not logged in. Please login again.".to_owned());
            loading.set(false);
            return;
        };
        let http = fetch_session.http.clone();
        leptos::task::spawn_local(async move {
            match participant::participations(&http, person, Some(semester), Some(group)).await {
                Ok(list) => {
                    rows.set(list);
                    error.set(String::new());
                }
                Err(e) => error.set(format!("Failed to load participations: {}", e.display_message())),
            }
            loading.set(false);
        });
    });

    let save_session = session.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((participation_id, form)) = editing.get() else {
            return;
        };
        let record = match form.to_record() {
            Ok(record) => record,
            Err(message) => {
                notice.set(message);
                return;
            }
        };
        let http = save_session.http.clone();
        leptos::task::spawn_local(async move {
            match participant::save_record(&http, participation_id, &record).await {
                Ok(_) => {
                    editing.set(None);
                    notice.set("Record updated successfully!".to_owned());
                    reload.update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => notice.set(format!("Failed to update record: {}", e.display_message())),
            }
        });
    };

    let heading = move || {
        rows.with(|list| {
            list.first()
                .map(|p| format!("{} - {}", p.semester_name, p.group_name))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="user-participation-container">
            <div class="user-participation-header">
                <A href=routes::USER_PROFILE attr:class="back-button">"Back to Profile"</A>
                <div class="header-info">
                    <h1>"My Participation Records"</h1>
                    <p class="header-subtitle">{heading}</p>
                </div>
            </div>
            <Show when=move || !notice.get().is_empty()>
                <p class="notice">{move || notice.get()}</p>
            </Show>
            {move || {
                if loading.get() {
                    return view! { <p class="loading">"Loading participations..."</p> }.into_any();
                }
                let message = error.get();
                if !message.is_empty() {
                    return view! { <p class="error-message">{message}</p> }.into_any();
                }
                let list = rows.get();
                if list.is_empty() {
                    return view! { <p class="no-data">"No participation records for this group yet."</p> }.into_any();
                }
                list.into_iter()
                    .map(|p| view! { <ParticipationCard participation=p editing=editing on_save=on_save.clone()/> })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn ParticipationCard<F>(
    participation: UserParticipation,
    editing: RwSignal<Option<(i64, RecordForm)>>,
    on_save: F,
) -> impl IntoView
where
    F: Fn(leptos::ev::SubmitEvent) + Clone + Send + Sync + 'static,
{
    let id = participation.participation_id;
    let record = participation.weekly_record.clone();
    let week = record
        .as_ref()
        .and_then(|r| r.week_number)
        .map_or_else(|| "N/A".to_owned(), |w| w.to_string());
    let status = participation.status.clone().unwrap_or_default();
    let is_editing = move || editing.with(|e| e.as_ref().is_some_and(|(open, _)| *open == id));

    let start_edit = move |_| {
        let form = record
            .as_ref()
            .map_or_else(|| RecordForm::blank(&today()), |r| RecordForm::from_record(r, &today()));
        editing.set(Some((id, form)));
    };

    view! {
        <div class="participation-card">
            <div class="participation-header">
                <div>
                    <h3>"Week " {week}</h3>
                    <p class="participation-date">{participation.participation_date.clone().unwrap_or_default()}</p>
                </div>
                <span class=format!("status-badge status-{status}")>{status.clone()}</span>
            </div>
            <Show
                when=is_editing
                fallback=move || view! { <button class="edit-button" on:click=start_edit.clone()>"Edit Record"</button> }
            >
                <RecordEditor editing=editing on_save=on_save.clone()/>
            </Show>
        </div>
    }
}

#[component]
fn RecordEditor<F>(editing: RwSignal<Option<(i64, RecordForm)>>, on_save: F) -> impl IntoView
where
    F: Fn(leptos::ev::SubmitEvent) + Clone + Send + Sync + 'static,
{
    let field = move |read: fn(&RecordForm) -> String| {
        move || editing.with(|e| e.as_ref().map(|(_, form)| read(form)).unwrap_or_default())
    };
    let flag = move |read: fn(&RecordForm) -> bool| move || editing.with(|e| e.as_ref().is_some_and(|(_, form)| read(form)));
    let set = move |write: fn(&mut RecordForm, String), value: String| {
        editing.update(|e| {
            if let Some((_, form)) = e.as_mut() {
                write(form, value);
            }
        });
    };
    let set_flag = move |write: fn(&mut RecordForm, bool), value: bool| {
        editing.update(|e| {
            if let Some((_, form)) = e.as_mut() {
                write(form, value);
            }
        });
    };
    let attendance_options = move |current: fn(&RecordForm) -> Attendance| {
        Attendance::ALL
            .into_iter()
            .map(|option| {
                let selected = move || editing.with(|e| e.as_ref().is_some_and(|(_, f)| current(f) == option));
                view! { <option value=option.as_str() selected=selected>{option.label()}</option> }
            })
            .collect_view()
    };

    view! {
        <form class="record-form" on:submit=on_save>
            <label>"Week Number"
                <input type="number" min="1" prop:value=field(|f| f.week_number.clone())
                    on:input=move |ev| set(|f, v| f.week_number = v, event_target_value(&ev))/>
            </label>
            <label>"Service 1"
                <select on:change=move |ev| set(|f, v| f.service1 = Attendance::parse(Some(&v)), event_target_value(&ev))>
                    {attendance_options(|f| f.service1)}
                </select>
            </label>
            <label>"Service 2"
                <select on:change=move |ev| set(|f, v| f.service2 = Attendance::parse(Some(&v)), event_target_value(&ev))>
                    {attendance_options(|f| f.service2)}
                </select>
            </label>
            <label>"Summary 1"
                <input type="checkbox" prop:checked=flag(|f| f.summary1)
                    on:change=move |ev| set_flag(|f, v| f.summary1 = v, event_target_checked(&ev))/>
            </label>
            <label>"Summary 2"
                <input type="checkbox" prop:checked=flag(|f| f.summary2)
                    on:change=move |ev| set_flag(|f, v| f.summary2 = v, event_target_checked(&ev))/>
            </label>
            <label>"QT"
                <input type="number" min="0" prop:value=field(|f| f.qt.clone())
                    on:input=move |ev| set(|f, v| f.qt = v, event_target_value(&ev))/>
            </label>
            <label>"Reading"
                <input type="number" min="0" prop:value=field(|f| f.reading.clone())
                    on:input=move |ev| set(|f, v| f.reading = v, event_target_value(&ev))/>
            </label>
            <label>"Prayer"
                <input type="number" min="0" prop:value=field(|f| f.pray.clone())
                    on:input=move |ev| set(|f, v| f.pray = v, event_target_value(&ev))/>
            </label>
            <label>"Memorization"
                <input type="number" min="0" prop:value=field(|f| f.memorize.clone())
                    on:input=move |ev| set(|f, v| f.memorize = v, event_target_value(&ev))/>
            </label>
            <label>"Submitted"
                <input type="date" prop:value=field(|f| f.submitted_date.clone())
                    on:input=move |ev| set(|f, v| f.submitted_date = v, event_target_value(&ev))/>
            </label>
            <div class="form-actions">
                <button type="submit" class="save-button">"Save"</button>
                <button type="button" class="cancel-button" on:click=move |_| editing.set(None)>"Cancel"</button>
            </div>
        </form>
    }
}
