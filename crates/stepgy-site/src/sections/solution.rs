use crate::components::StepCard;
use leptos::*;
use stepgy_core::content::Solution;

#[component]
pub fn SolutionSection(solution: Solution) -> impl IntoView {
    let Solution { title, subtitle, steps } = solution;
    let steps = steps
        .into_iter()
        .map(|step| view! { <StepCard step=step/> })
        .collect_view();

    view! {
        <div class="container mx-auto px-4">
            <div class="text-center mb-12">
                <h2 class="text-4xl font-bold text-gray-900">{title}</h2>
                <p class="text-lg text-gray-600 mt-4">{subtitle}</p>
            </div>
            <div class="grid md:grid-cols-3 gap-8">
                {steps}
            </div>
        </div>
    }
}
