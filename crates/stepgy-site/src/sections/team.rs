use crate::components::MemberCard;
use leptos::*;
use stepgy_core::content::Team;

#[component]
pub fn TeamSection(team: Team) -> impl IntoView {
    let Team { title, subtitle, members } = team;
    let members = members
        .into_iter()
        .map(|member| view! { <MemberCard member=member/> })
        .collect_view();

    view! {
        <div class="container mx-auto px-4">
            <div class="text-center mb-12">
                <h2 class="text-4xl font-bold text-gray-900">{title}</h2>
                <p class="text-lg text-gray-600 mt-4">{subtitle}</p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                {members}
            </div>
        </div>
    }
}
