use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdSearch};
use dioxus_free_icons::Icon;
use shared_types::{AnalysisWorkflow, DocumentMeta, WorkflowStage};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, PageHeader, PageSubtitle, PageTitle, Separator, Spinner,
};

use crate::analysis::AnalysisClient;
use crate::format_helpers::format_file_size;

/// The document-analysis dashboard: upload on the left, results on the
/// right. All transition rules live in [`AnalysisWorkflow`]; this component
/// only wires browser events to it.
#[component]
pub fn Dashboard() -> Element {
    let analysis = use_context::<AnalysisClient>();
    let mut workflow = use_signal(AnalysisWorkflow::new);

    let stage = workflow.read().stage();
    let selected = workflow.read().document().cloned();
    let report = workflow.read().report().cloned();
    let can_start = workflow.read().can_start();

    let on_file = move |evt: FormEvent| {
        let files = evt.files();
        if let Some(file) = files.first() {
            let document = DocumentMeta::new(
                file.name(),
                file.size(),
                file.content_type().unwrap_or_default(),
            );
            // Rejections are silent by contract: no state change, no
            // user-visible feedback.
            match workflow.write().select_document(document) {
                Ok(()) => {}
                Err(rejection) => tracing::warn!(%rejection, "ignoring selected file"),
            }
        }
    };

    let on_start = move |_| {
        let client = analysis.clone();
        spawn(async move {
            let Some(document) = workflow.write().begin_analysis() else {
                return;
            };
            let report = client.analyze(document).await;
            workflow.write().complete_analysis(report);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "Document Analysis" }
            PageSubtitle { "AI-assisted review of medical device documentation" }
        }

        div { class: "dashboard-grid",
            // Upload panel
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                        "Upload Medical Document"
                    }
                    CardDescription { "Choose a PDF document to analyze" }
                }
                CardContent {
                    label { class: "upload-dropzone",
                        input {
                            r#type: "file",
                            accept: ".pdf",
                            class: "upload-input",
                            onchange: on_file,
                        }
                        p { class: "upload-dropzone-title", "Choose PDF file" }
                        p { class: "upload-dropzone-hint", "Only PDF documents are accepted" }
                    }

                    if let Some(document) = selected {
                        div { class: "upload-selected",
                            Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                            span { class: "upload-selected-name", "{document.name}" }
                            Badge { variant: BadgeVariant::Secondary,
                                "{format_file_size(document.size_bytes)}"
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: !can_start,
                        onclick: on_start,
                        class: "upload-start",
                        if stage == WorkflowStage::Analyzing {
                            "Analyzing Document..."
                        } else {
                            Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                            "Start Analysis"
                        }
                    }
                }
            }

            // Results panel
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                        "Analysis Results"
                    }
                    CardDescription { "Findings grouped by clinical relevance" }
                }
                CardContent {
                    match (stage, report) {
                        (WorkflowStage::Analyzing, _) => rsx! {
                            div { class: "results-pending",
                                Spinner {}
                                p { class: "results-pending-title", "Analysis in progress" }
                                p { class: "results-pending-hint",
                                    "Reviewing the document and generating findings..."
                                }
                            }
                        },
                        (_, Some(report)) => rsx! {
                            div { class: "results-findings",
                                FindingSection {
                                    title: "Medical Benefits",
                                    variant: BadgeVariant::Positive,
                                    tone: "positive",
                                    entries: report.benefits.clone(),
                                }
                                Separator {}
                                FindingSection {
                                    title: "Risks & Considerations",
                                    variant: BadgeVariant::Caution,
                                    tone: "caution",
                                    entries: report.risks.clone(),
                                }
                                Separator {}
                                FindingSection {
                                    title: "Safety Profile",
                                    variant: BadgeVariant::Primary,
                                    tone: "info",
                                    entries: report.safety_notes.clone(),
                                }
                            }
                        },
                        _ => rsx! {
                            div { class: "results-empty",
                                p { class: "results-empty-title", "No analysis yet" }
                                p { class: "results-empty-hint",
                                    "Upload a PDF and start the analysis to see findings here"
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

/// One category of findings: heading, count badge, one row per entry.
#[component]
fn FindingSection(
    title: &'static str,
    variant: BadgeVariant,
    tone: &'static str,
    entries: Vec<String>,
) -> Element {
    rsx! {
        div { class: "finding-section",
            div { class: "finding-section-heading",
                h4 { class: "finding-section-title finding-title-{tone}", "{title}" }
                Badge { variant: variant, "{entries.len()}" }
            }
            div { class: "finding-section-rows",
                for entry in entries.iter() {
                    div { class: "finding-row finding-row-{tone}",
                        p { "{entry}" }
                    }
                }
            }
        }
    }
}
