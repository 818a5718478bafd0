//! Main application component

use crate::components::*;
use crate::sections::*;
use leptos::*;
use std::sync::Arc;
use stepgy_core::page::SectionBlock;
use stepgy_core::{Block, ContentTree, FormState, Page, SectionId, BRAND};

/// Plays each framed section's entrance once, then stops observing it.
/// The threshold comes from the frame's `data-threshold`.
const ENTRANCE_SCRIPT: &str = r#"
(function () {
  document.querySelectorAll('section[data-entrance="once"]').forEach(function (frame) {
    var reveal = function () {
      frame.classList.remove('section-pre-entrance');
      frame.classList.add('section-resting');
    };
    var threshold = parseFloat(frame.dataset.threshold);
    if (!(threshold >= 0 && threshold <= 1)) {
      reveal();
      return;
    }
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (entry.intersectionRatio > threshold) {
          reveal();
          observer.disconnect();
        }
      });
    }, { threshold: [threshold, Math.min(1, threshold + 0.01)] });
    observer.observe(frame);
  });
})();
"#;

/// Locks the contact form while its post is in flight: fields go read-only
/// so they are still sent, the button is switched off, the submitting label
/// and spinner are shown, and a second submit is swallowed.
const SUBMIT_SCRIPT: &str = r#"
(function () {
  document.querySelectorAll('form[data-contact-form]').forEach(function (form) {
    form.addEventListener('submit', function (event) {
      if (form.dataset.state === 'submitting') {
        event.preventDefault();
        return;
      }
      form.dataset.state = 'submitting';
      form.querySelectorAll('input, textarea').forEach(function (field) {
        field.readOnly = true;
      });
      var label = form.querySelector('[data-role="submit-label"]');
      if (label) {
        label.textContent = form.dataset.submittingLabel;
      }
      var spinner = form.querySelector('[data-role="submit-spinner"]');
      if (spinner) {
        spinner.hidden = false;
      }
      var button = form.querySelector('button[type="submit"]');
      if (button) {
        button.disabled = true;
      }
    });
  });
})();
"#;

const ENTRANCE_STYLE: &str = r#"
section[data-entrance] { transition: opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1), transform 0.8s cubic-bezier(0.4, 0, 0.2, 1); }
.section-pre-entrance { opacity: 0; transform: translateY(50px); }
.section-resting { opacity: 1; transform: none; }
"#;

#[component]
pub fn App(content: Arc<ContentTree>, page: Page, form: FormState) -> impl IntoView {
    let blocks = page
        .blocks()
        .iter()
        .cloned()
        .map(|block| render_block(&content, block, &form))
        .collect_view();

    view! {
        <div class="min-h-screen bg-gray-50">
            {blocks}
        </div>
    }
}

fn render_block(content: &ContentTree, block: Block, form: &FormState) -> View {
    match block {
        Block::Nav { brand, items } => view! { <MarketingNav brand=brand items=items/> }.into_view(),
        Block::Hero { cta_target } => {
            let hero = content.hero.clone();
            view! { <HeroSection hero=hero cta_target=cta_target/> }.into_view()
        }
        Block::Section(section) => render_section(content, section, form),
        Block::Footer => {
            let footer = content.footer.clone();
            view! { <Footer brand=BRAND footer=footer/> }.into_view()
        }
    }
}

fn render_section(content: &ContentTree, block: SectionBlock, form: &FormState) -> View {
    match block.id {
        SectionId::About => {
            let text = content.about.clone();
            view! {
                <Section block=block class="py-20 bg-white">
                    <TextSection text=text/>
                </Section>
            }
            .into_view()
        }
        SectionId::Problem => {
            let text = content.problem.clone();
            view! {
                <Section block=block class="py-20 bg-gray-50">
                    <TextSection text=text/>
                </Section>
            }
            .into_view()
        }
        SectionId::Solution => {
            let solution = content.solution.clone();
            view! {
                <Section block=block class="py-20 bg-white">
                    <SolutionSection solution=solution/>
                </Section>
            }
            .into_view()
        }
        SectionId::Technology => {
            let technology = content.technology.clone();
            view! {
                <Section block=block class="py-20 bg-gray-50">
                    <TechnologySection technology=technology/>
                </Section>
            }
            .into_view()
        }
        SectionId::Prototype => {
            let prototype = content.prototype.clone();
            view! {
                <Section block=block class="py-20 bg-white">
                    <PrototypeSection prototype=prototype/>
                </Section>
            }
            .into_view()
        }
        SectionId::Team => {
            let team = content.team.clone();
            view! {
                <Section block=block class="py-20 bg-gray-50">
                    <TeamSection team=team/>
                </Section>
            }
            .into_view()
        }
        SectionId::Gallery => {
            let gallery = content.gallery.clone();
            view! {
                <Section block=block class="py-20 bg-white">
                    <GallerySection gallery=gallery/>
                </Section>
            }
            .into_view()
        }
        SectionId::Contact => {
            let contact = content.contact.clone();
            let form = form.clone();
            view! {
                <Section block=block class="py-20 bg-gray-50">
                    <ContactSection contact=contact form=form/>
                </Section>
            }
            .into_view()
        }
        // Hero and footer are never framed
        SectionId::Hero | SectionId::Footer => ().into_view(),
    }
}

/// Render the complete HTML document
pub fn render_document(content: Arc<ContentTree>, page: Page, form: FormState) -> String {
    let body = leptos::ssr::render_to_string(move || {
        view! { <App content=content page=page form=form/> }
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1"/>
<title>{BRAND}</title>
<script src="https://cdn.tailwindcss.com"></script>
<link rel="stylesheet" href="/assets/stepgy.css"/>
<style>{ENTRANCE_STYLE}</style>
<noscript><style>.section-pre-entrance {{ opacity: 1; transform: none; }}</style></noscript>
</head>
<body>
{body}
<script>{ENTRANCE_SCRIPT}</script>
<script>{SUBMIT_SCRIPT}</script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepgy_core::contact::SUBMITTING_LABEL;
    use stepgy_core::{FormField, Threshold, VisibilityMap};

    fn render(form: FormState, visibility: &VisibilityMap) -> String {
        let content = Arc::new(ContentTree::stepgy());
        let page = Page::compose(&content, visibility);
        render_document(content, page, form)
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mut visibility = VisibilityMap::initial();
        visibility.mark_entered(SectionId::About);

        let first = render(FormState::new(), &visibility);
        let second = render(FormState::new(), &visibility);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sections_render_in_page_order() {
        let html = render(FormState::new(), &VisibilityMap::initial());
        let positions: Vec<usize> = SectionId::FRAMED
            .iter()
            .map(|id| html.find(&format!("id=\"{}\"", id.anchor())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.find("id=\"home\"").unwrap() < positions[0]);
    }

    #[test]
    fn test_entrance_phase_classes() {
        let mut visibility = VisibilityMap::initial();
        visibility.mark_entered(SectionId::Team);

        let html = render(FormState::new(), &visibility);
        // Frame classes are always followed by the section's own spacing
        assert_eq!(html.matches("section-resting py-20").count(), 1);
        assert_eq!(
            html.matches("section-pre-entrance py-20").count(),
            SectionId::FRAMED.len() - 1
        );
        assert_eq!(html.matches("data-threshold=\"0.1\"").count(), SectionId::FRAMED.len());
    }

    #[test]
    fn test_entrance_script_keeps_rendered_threshold() {
        let html = render(FormState::new(), &VisibilityMap::initial());
        let threshold = format!("data-threshold=\"{}\"", Threshold::DEFAULT.value());
        assert!(html.contains(&threshold));
        assert!(html.contains("parseFloat(frame.dataset.threshold);"));
        assert!(!ENTRANCE_SCRIPT.contains("||"));
    }

    #[test]
    fn test_content_icons_are_inlined() {
        let html = render(FormState::new(), &VisibilityMap::initial());
        for icon in ContentTree::stepgy().icon_keys() {
            assert!(html.contains(&format!("data-icon=\"{icon}\"")), "missing {icon}");
        }
    }

    fn has_disabled_control(html: &str) -> bool {
        html.contains(" disabled")
    }

    #[test]
    fn test_inputs_disabled_while_submitting() {
        let mut form = FormState::with_fields("Ana", "ana@x.com", "Hola");
        form.begin_submit().unwrap();

        let html = render(form, &VisibilityMap::initial());
        assert!(html.contains("data-state=\"submitting\""));
        assert!(html.contains(SUBMITTING_LABEL));
        assert!(has_disabled_control(&html));
    }

    #[test]
    fn test_idle_form_is_enabled() {
        let mut form = FormState::new();
        form.edit(FormField::Name, "Ana").unwrap();

        let html = render(form, &VisibilityMap::initial());
        assert!(html.contains("data-state=\"idle\""));
        assert!(!has_disabled_control(&html));
        assert!(html.contains("Ana"));
        assert!(html.contains("Enviar mensaje"));
    }

    #[test]
    fn test_page_locks_form_while_post_is_in_flight() {
        let html = render(FormState::new(), &VisibilityMap::initial());

        assert!(html.contains("data-contact-form=\"true\""));
        assert!(html.contains(&format!("data-submitting-label=\"{SUBMITTING_LABEL}\"")));
        assert!(html.contains("data-role=\"submit-label\""));
        assert!(html.contains("data-role=\"submit-spinner\""));
        assert!(html.contains(SUBMIT_SCRIPT));

        assert!(SUBMIT_SCRIPT.contains("addEventListener('submit'"));
        assert!(SUBMIT_SCRIPT.contains("field.readOnly = true"));
        assert!(SUBMIT_SCRIPT.contains("button.disabled = true"));
        assert!(SUBMIT_SCRIPT.contains("event.preventDefault()"));
        assert!(SUBMIT_SCRIPT.contains("form.dataset.submittingLabel"));
    }
}
