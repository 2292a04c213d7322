//! App shell for the admin console: navigation between the three screens,
//! the record tables, the add-record modal, the inline edit form, and the
//! read-only reports dashboard. All state lives in the `admin_core`
//! screens; this layer only dispatches intents and renders snapshots.

use admin_core::{
    OrganizationField, ReportsCatalog, Screen, SessionState, VolunteerField, ALL_REPORTS_LABEL,
    TOP_SKILL_LABELS,
};
use serde::{Deserialize, Serialize};
use shared::{
    domain::{join_skills, Organization, OrganizationDraft, Volunteer, VolunteerDraft},
    error::DraftError,
};

pub const SETTINGS_STORAGE_KEY: &str = "coord_admin_ui_settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminTab {
    Organizations,
    Volunteers,
    Reports,
}

impl AdminTab {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "organizations" => Some(Self::Organizations),
            "volunteers" => Some(Self::Volunteers),
            "reports" => Some(Self::Reports),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Organizations => "Organizations",
            Self::Volunteers => "Volunteers",
            Self::Reports => "Reports",
        }
    }
}

/// UI choices restored across launches via eframe storage. Record data is
/// deliberately not persisted; collections reseed on every start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedUiSettings {
    pub active_tab: AdminTab,
    pub selected_report: String,
}

pub struct AdminApp {
    active_tab: AdminTab,
    organizations: Screen<Organization>,
    volunteers: Screen<Volunteer>,
    reports: ReportsCatalog,
    selected_report: String,
    organization_error: Option<DraftError>,
    volunteer_error: Option<DraftError>,
}

impl AdminApp {
    pub fn new(
        default_tab: AdminTab,
        screen_override: Option<AdminTab>,
        persisted: Option<PersistedUiSettings>,
    ) -> Self {
        let persisted_tab = persisted.as_ref().map(|settings| settings.active_tab);
        let selected_report = persisted
            .map(|settings| settings.selected_report)
            .unwrap_or_else(|| ALL_REPORTS_LABEL.to_string());
        Self {
            active_tab: screen_override.or(persisted_tab).unwrap_or(default_tab),
            organizations: Screen::seeded(admin_core::seed::sample_organizations()),
            volunteers: Screen::seeded(admin_core::seed::sample_volunteers()),
            reports: ReportsCatalog::sample(),
            selected_report,
            organization_error: None,
            volunteer_error: None,
        }
    }

    fn organizations_screen(&mut self, ui: &mut egui::Ui) {
        ui.heading("Organization Management");
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let mut query = self.organizations.search_query().to_string();
            let search = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search organizations...")
                    .desired_width(260.0),
            );
            if search.changed() {
                self.organizations.set_search_query(query);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Add Organization").clicked() {
                    self.organizations.open_create();
                    self.organization_error = None;
                }
            });
        });
        ui.add_space(12.0);

        ui.strong("Organization List");
        egui::Grid::new("organization_list")
            .striped(true)
            .num_columns(3)
            .spacing([28.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Description");
                ui.strong("Actions");
                ui.end_row();
                for organization in self.organizations.visible_records() {
                    ui.label(&organization.name);
                    ui.label(&organization.description);
                    ui.horizontal(|ui| {
                        if ui.button("Edit").clicked() {
                            self.organizations.start_edit(organization.id);
                            self.organization_error = None;
                        }
                        if ui.button("Delete").clicked() {
                            self.organizations.delete_record(organization.id);
                        }
                    });
                    ui.end_row();
                }
            });

        match self.organizations.session().clone() {
            SessionState::Creating(draft) => self.organization_create_modal(ui, draft),
            SessionState::Editing { draft, .. } => self.organization_edit_form(ui, draft),
            SessionState::Idle => {}
        }
    }

    fn organization_create_modal(&mut self, ui: &mut egui::Ui, draft: OrganizationDraft) {
        egui::Window::new("Add Organization")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ui.ctx(), |ui| {
                let mut name = draft.name.clone();
                if ui
                    .add(egui::TextEdit::singleline(&mut name).hint_text("Organization name"))
                    .changed()
                {
                    self.organizations.edit_field(OrganizationField::Name, name);
                }
                let mut description = draft.description.clone();
                if ui
                    .add(
                        egui::TextEdit::multiline(&mut description)
                            .hint_text("Description")
                            .desired_rows(3),
                    )
                    .changed()
                {
                    self.organizations
                        .edit_field(OrganizationField::Description, description);
                }
                if let Some(err) = self.organization_error {
                    ui.colored_label(ui.visuals().error_fg_color, err.to_string());
                }
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        self.organization_error = self.organizations.commit_create().err();
                    }
                    if ui.button("Cancel").clicked() {
                        self.organizations.cancel_edit();
                        self.organization_error = None;
                    }
                });
            });
    }

    fn organization_edit_form(&mut self, ui: &mut egui::Ui, draft: OrganizationDraft) {
        ui.add_space(16.0);
        ui.group(|ui| {
            ui.strong("Edit Organization");
            let mut name = draft.name.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut name).hint_text("Organization name"))
                .changed()
            {
                self.organizations.edit_field(OrganizationField::Name, name);
            }
            let mut description = draft.description.clone();
            if ui
                .add(
                    egui::TextEdit::multiline(&mut description)
                        .hint_text("Description")
                        .desired_rows(3),
                )
                .changed()
            {
                self.organizations
                    .edit_field(OrganizationField::Description, description);
            }
            if let Some(err) = self.organization_error {
                ui.colored_label(ui.visuals().error_fg_color, err.to_string());
            }
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    self.organization_error = self.organizations.save_edit().err();
                }
                if ui.button("Cancel").clicked() {
                    self.organizations.cancel_edit();
                    self.organization_error = None;
                }
            });
        });
    }

    fn volunteers_screen(&mut self, ui: &mut egui::Ui) {
        ui.heading("Volunteer Management");
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let mut query = self.volunteers.search_query().to_string();
            let search = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search volunteers...")
                    .desired_width(260.0),
            );
            if search.changed() {
                self.volunteers.set_search_query(query);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Add Volunteer").clicked() {
                    self.volunteers.open_create();
                    self.volunteer_error = None;
                }
            });
        });
        ui.add_space(12.0);

        ui.strong("Volunteer List");
        egui::Grid::new("volunteer_list")
            .striped(true)
            .num_columns(3)
            .spacing([28.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Skills");
                ui.strong("Actions");
                ui.end_row();
                for volunteer in self.volunteers.visible_records() {
                    ui.label(&volunteer.name);
                    ui.label(join_skills(&volunteer.skills));
                    ui.horizontal(|ui| {
                        if ui.button("Edit").clicked() {
                            self.volunteers.start_edit(volunteer.id);
                            self.volunteer_error = None;
                        }
                        if ui.button("Delete").clicked() {
                            self.volunteers.delete_record(volunteer.id);
                        }
                    });
                    ui.end_row();
                }
            });

        match self.volunteers.session().clone() {
            SessionState::Creating(draft) => self.volunteer_create_modal(ui, draft),
            SessionState::Editing { draft, .. } => self.volunteer_edit_form(ui, draft),
            SessionState::Idle => {}
        }
    }

    fn volunteer_create_modal(&mut self, ui: &mut egui::Ui, draft: VolunteerDraft) {
        egui::Window::new("Add Volunteer")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ui.ctx(), |ui| {
                let mut name = draft.name.clone();
                if ui
                    .add(egui::TextEdit::singleline(&mut name).hint_text("Volunteer name"))
                    .changed()
                {
                    self.volunteers.edit_field(VolunteerField::Name, name);
                }
                let mut skills = draft.skills.clone();
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut skills)
                            .hint_text("Skills (comma separated)"),
                    )
                    .changed()
                {
                    self.volunteers.edit_field(VolunteerField::Skills, skills);
                }
                if let Some(err) = self.volunteer_error {
                    ui.colored_label(ui.visuals().error_fg_color, err.to_string());
                }
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        self.volunteer_error = self.volunteers.commit_create().err();
                    }
                    if ui.button("Cancel").clicked() {
                        self.volunteers.cancel_edit();
                        self.volunteer_error = None;
                    }
                });
            });
    }

    fn volunteer_edit_form(&mut self, ui: &mut egui::Ui, draft: VolunteerDraft) {
        ui.add_space(16.0);
        ui.group(|ui| {
            ui.strong("Edit Volunteer");
            let mut name = draft.name.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut name).hint_text("Volunteer name"))
                .changed()
            {
                self.volunteers.edit_field(VolunteerField::Name, name);
            }
            let mut skills = draft.skills.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut skills).hint_text("Skills (comma separated)"))
                .changed()
            {
                self.volunteers.edit_field(VolunteerField::Skills, skills);
            }
            if let Some(err) = self.volunteer_error {
                ui.colored_label(ui.visuals().error_fg_color, err.to_string());
            }
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    self.volunteer_error = self.volunteers.save_edit().err();
                }
                if ui.button("Cancel").clicked() {
                    self.volunteers.cancel_edit();
                    self.volunteer_error = None;
                }
            });
        });
    }

    fn reports_screen(&mut self, ui: &mut egui::Ui) {
        ui.heading("Reports Overview");
        ui.add_space(12.0);

        let options: Vec<String> = self
            .reports
            .options()
            .iter()
            .map(|label| label.to_string())
            .collect();
        egui::ComboBox::from_label("Select Organization:")
            .selected_text(self.selected_report.clone())
            .show_ui(ui, |ui| {
                for option in &options {
                    ui.selectable_value(&mut self.selected_report, option.clone(), option);
                }
            });

        let Some(report) = self.reports.lookup(&self.selected_report) else {
            ui.label("No report data for this selection.");
            return;
        };

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            summary_card(ui, "Total Events", &report.total_events().to_string());
            summary_card(ui, "Total Donations", &format_donations(report.total_donations));
            summary_card(ui, "Total Volunteers", &report.total_volunteers.to_string());
        });

        ui.add_space(12.0);
        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.strong("Event Summary");
                for (label, participants) in
                    report.event_labels().iter().zip(&report.event_participants)
                {
                    ui.label(format!("{label}: {participants} participants"));
                }
            });
            columns[1].group(|ui| {
                ui.strong("Top Skills");
                for (label, count) in TOP_SKILL_LABELS.iter().zip(&report.skill_counts) {
                    ui.label(format!("{label}: {count}"));
                }
            });
        });

        ui.add_space(12.0);
        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.strong("Recent Donators");
                for donator in &report.recent_donators {
                    ui.label(format!("• {donator}"));
                }
            });
            columns[1].group(|ui| {
                ui.strong("Recent Events");
                for event in &report.recent_events {
                    ui.label(format!("• {event}"));
                }
            });
        });
    }
}

impl eframe::App for AdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("admin_nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in [AdminTab::Organizations, AdminTab::Volunteers, AdminTab::Reports] {
                    ui.selectable_value(&mut self.active_tab, tab, tab.label());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.active_tab {
                AdminTab::Organizations => self.organizations_screen(ui),
                AdminTab::Volunteers => self.volunteers_screen(ui),
                AdminTab::Reports => self.reports_screen(ui),
            });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedUiSettings {
            active_tab: self.active_tab,
            selected_report: self.selected_report.clone(),
        };
        if let Ok(text) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, text);
        }
    }
}

fn summary_card(ui: &mut egui::Ui, title: &str, value: &str) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.strong(title);
            ui.heading(value);
        });
    });
}

fn format_donations(total: u64) -> String {
    format!("₱{total}")
}
