use eframe::egui::{self, Color32, Frame, Margin, RichText, Stroke, Ui};

use crate::content::{Contact, Project};

use super::super::render_utils::{
    ACCENT_BLUE, ACCENT_EMERALD, ACCENT_PURPLE, CARD_BACKGROUND, CARD_BORDER, TEXT_FAINT,
    TEXT_MUTED, TEXT_STRONG, accent_color,
};
use super::super::{PageModel, Toast};

const SECTION_GAP: f32 = 56.0;
const CONTENT_MAX_WIDTH: f32 = 960.0;
const TOAST_SECS: f64 = 2.0;

fn card(accent: Color32) -> Frame {
    Frame::new()
        .fill(CARD_BACKGROUND)
        .stroke(Stroke::new(1.0, CARD_BORDER.lerp_to_gamma(accent, 0.15)))
        .corner_radius(12.0)
        .inner_margin(Margin::same(16))
}

fn section_heading(ui: &mut Ui, number: &str, title: &str) {
    ui.add_space(SECTION_GAP);
    ui.label(RichText::new(number).monospace().color(ACCENT_EMERALD));
    ui.label(RichText::new(title).size(28.0).strong().color(TEXT_STRONG));
    ui.add_space(16.0);
}

fn pill(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(
        RichText::new(text)
            .monospace()
            .size(12.0)
            .color(color)
            .background_color(color.gamma_multiply(0.12)),
    );
}

impl PageModel {
    pub(in crate::app) fn draw_sections(&mut self, ui: &mut Ui) {
        let side_margin = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(16.0);
        Frame::new()
            .inner_margin(Margin::symmetric(side_margin.min(127.0) as i8, 0))
            .show(ui, |ui| {
                ui.set_max_width(CONTENT_MAX_WIDTH);
                self.draw_hero(ui);
                self.draw_experience(ui);
                self.draw_projects(ui);
                self.draw_skills(ui);
                self.draw_contact(ui);
                ui.add_space(SECTION_GAP);
            });
    }

    fn draw_hero(&self, ui: &mut Ui) {
        let owner = &self.content.owner;
        ui.add_space(SECTION_GAP * 1.5);
        ui.label(RichText::new("Hi, I'm").monospace().color(ACCENT_EMERALD));
        ui.label(RichText::new(&owner.name).size(48.0).strong().color(TEXT_STRONG));
        ui.label(RichText::new(&owner.headline).size(22.0).color(TEXT_MUTED));
        if !owner.summary.is_empty() {
            ui.add_space(12.0);
            ui.label(RichText::new(&owner.summary).size(16.0).color(TEXT_MUTED));
        }
        if !owner.stack.is_empty() {
            ui.add_space(24.0);
            ui.horizontal_wrapped(|ui| {
                for tech in &owner.stack {
                    pill(ui, tech, ACCENT_EMERALD);
                }
            });
        }
    }

    fn draw_experience(&self, ui: &mut Ui) {
        section_heading(ui, "01.", "Experience");
        for experience in &self.content.experiences {
            let accent = accent_color(experience.accent);
            ui.push_id(&experience.id, |ui| {
                card(accent).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(&experience.role)
                                .strong()
                                .size(18.0)
                                .color(TEXT_STRONG),
                        );
                        ui.label(RichText::new(format!("@ {}", experience.company)).color(accent));
                    });
                    ui.label(
                        RichText::new(&experience.period)
                            .monospace()
                            .small()
                            .color(TEXT_FAINT),
                    );
                    ui.add_space(6.0);
                    ui.horizontal_wrapped(|ui| {
                        for highlight in &experience.highlights {
                            pill(ui, highlight, accent);
                        }
                    });
                    ui.add_space(6.0);
                    for detail in &experience.details {
                        ui.label(RichText::new(format!("▹ {detail}")).color(TEXT_MUTED));
                    }
                });
            });
            ui.add_space(12.0);
        }
    }

    fn draw_projects(&self, ui: &mut Ui) {
        section_heading(ui, "02.", "Projects");
        for project in self.content.featured_projects() {
            project_card(ui, project, ACCENT_EMERALD);
        }
        for project in self.content.other_projects() {
            project_card(ui, project, ACCENT_BLUE);
        }
    }

    fn draw_skills(&mut self, ui: &mut Ui) {
        section_heading(ui, "03.", "Skills & Creative Suite");

        card(ACCENT_EMERALD).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Technical Proficiency").strong().size(18.0).color(TEXT_STRONG));
            ui.vertical_centered(|ui| {
                self.tooltip = self.radar.show(
                    ui,
                    &self.content.skills.technical,
                    self.reduced_motion,
                );
            });
        });
        ui.add_space(12.0);

        let skills = &self.content.skills;
        if !skills.ai_stack.is_empty() {
            card(ACCENT_BLUE).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("AI/ML Stack").strong().size(18.0).color(TEXT_STRONG));
                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    for tech in &skills.ai_stack {
                        pill(ui, tech, ACCENT_BLUE);
                    }
                });
            });
            ui.add_space(12.0);
        }

        if !skills.creative.is_empty() {
            card(ACCENT_PURPLE).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Creative Design").strong().size(18.0).color(TEXT_STRONG));
                ui.add_space(6.0);
                for tool in &skills.creative {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&tool.name).color(TEXT_STRONG));
                        ui.label(RichText::new(&tool.kind).small().color(TEXT_FAINT));
                    });
                    let fraction = tool.level.clamp(0, 100) as f32 / 100.0;
                    ui.add(
                        egui::ProgressBar::new(fraction)
                            .fill(ACCENT_PURPLE)
                            .desired_height(4.0),
                    );
                }
            });
            ui.add_space(12.0);
        }

        if !skills.certifications.is_empty() {
            card(ACCENT_EMERALD).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Certifications").strong().size(18.0).color(TEXT_STRONG));
                ui.add_space(6.0);
                for certification in &skills.certifications {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(&certification.name).color(TEXT_STRONG));
                        ui.label(
                            RichText::new(format!(
                                "{} · {}",
                                certification.detail, certification.year
                            ))
                            .small()
                            .color(TEXT_FAINT),
                        );
                    });
                }
            });
        }
    }

    fn draw_contact(&mut self, ui: &mut Ui) {
        section_heading(ui, "04.", "Get In Touch");
        let contact = self.content.contact.clone();
        let mut copied = None;

        card(ACCENT_EMERALD).show(ui, |ui| {
            ui.set_width(ui.available_width());
            for (label, value, link) in contact_rows(&contact) {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).monospace().color(TEXT_FAINT));
                    match link {
                        Some(url) => {
                            ui.hyperlink_to(RichText::new(value).color(ACCENT_EMERALD), url);
                        }
                        None => {
                            ui.label(RichText::new(value).color(TEXT_STRONG));
                        }
                    }
                    if ui
                        .small_button("Copy")
                        .on_hover_text(format!("Copy {label} to clipboard"))
                        .clicked()
                    {
                        ui.ctx().copy_text(value.to_owned());
                        copied = Some(label);
                    }
                });
            }
        });

        if let Some(label) = copied {
            let now = ui.input(|input| input.time);
            log::debug!("copied {label} to clipboard");
            self.toast = Some(Toast {
                message: "Copied to clipboard!".to_owned(),
                expires_at: now + TOAST_SECS,
            });
        }

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("© {}", self.content.owner.name))
                    .small()
                    .color(TEXT_FAINT),
            );
        });
    }
}

fn project_card(ui: &mut Ui, project: &Project, accent: Color32) {
    ui.push_id(&project.id, |ui| project_body(ui, project, accent));
    ui.add_space(12.0);
}

fn project_body(ui: &mut Ui, project: &Project, accent: Color32) {
    card(accent).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(&project.title).strong().size(18.0).color(TEXT_STRONG));
            if project.featured {
                pill(ui, "featured", accent);
            }
        });
        ui.label(RichText::new(&project.description).color(TEXT_MUTED));
        if !project.metrics.is_empty() {
            ui.add_space(6.0);
            for metric in &project.metrics {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&metric.label).small().color(TEXT_FAINT));
                    ui.label(RichText::new(&metric.value).monospace().color(accent));
                });
            }
        }
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            for tech in &project.tech {
                pill(ui, tech, accent);
            }
        });
    });
}

fn contact_rows(contact: &Contact) -> Vec<(&'static str, &str, Option<String>)> {
    vec![
        (
            "email",
            contact.email.as_str(),
            Some(format!("mailto:{}", contact.email)),
        ),
        (
            "linkedin",
            contact.linkedin.as_str(),
            Some(contact.linkedin.clone()),
        ),
        ("github", contact.github.as_str(), Some(contact.github.clone())),
        ("location", contact.location.as_str(), None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_location_is_not_a_link() {
        let contact = Contact {
            email: "a@b.c".to_owned(),
            linkedin: "https://linkedin.com/in/a".to_owned(),
            github: "https://github.com/a".to_owned(),
            location: "Somewhere".to_owned(),
        };
        let rows = contact_rows(&contact);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].2.as_deref(), Some("mailto:a@b.c"));
        assert!(rows[3].2.is_none());
    }
}
