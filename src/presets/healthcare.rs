//! 헬스케어 (healthcare) preset.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn healthcare_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "헬스케어".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["위생", "전문성", "배려", "안심", "접근성"]),
            target_feeling: "환자와 보호자에게 안전하고 전문적인 의료 서비스라는 신뢰를 제공".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "🏥 Patient Portal",
                "📋 Forms & Input",
                "📱 Mobile Health App",
                "♿ Accessibility Focus",
            ]),
            naming_rule: "Component/Context/State (예: AppointmentCard/Upcoming/Active)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 32px gutter (generous spacing for clarity)".to_string(),
                spacing_scale: vec![8, 16, 24, 32, 40, 48, 64, 80, 96, 128],
                radius_scale: vec![8, 12, 16, 20, 24],
                type_scale_tokens: strings(&[
                    "text-sm", "text-base", "text-lg", "text-xl", "text-2xl", "text-3xl",
                    "text-4xl",
                ]),
                breakpoints: strings(&[
                    "mobile: 375px",
                    "tablet: 768px",
                    "desktop: 1280px",
                    "large: 1600px",
                ]),
            },
        },

        layout: Layout {
            header: LayoutHeader {
                height_px: 80,
                structure: strings(&[
                    "Logo",
                    "Services Menu",
                    "Find Doctor",
                    "Emergency Contact",
                    "Patient Login",
                ]),
                sticky_behavior: "sticky with emergency contact always visible".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-8 lg:px-16".to_string(),
                    max_width: "max-w-[1400px]".to_string(),
                    nav_items: 5,
                },
                mobile: HeaderMobile {
                    pattern: "Simple drawer with emergency button fixed".to_string(),
                    height_px: 72,
                },
                tailwind_example: "bg-white border-b-2 border-secondary-200 sticky top-0 z-50 h-20 flex items-center justify-between px-8".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "Headline",
                    "Service Description",
                    "Appointment CTA",
                    "Emergency Info",
                    "Patient Testimonial",
                ]),
                desktop_grid: "Centered content with supporting imagery".to_string(),
                mobile_stack: "vertical, CTA prominent".to_string(),
                padding: "py-20 md:py-32".to_string(),
                background: "soft gradient from secondary-50 to white".to_string(),
                image_style: "Professional medical team, diverse and approachable".to_string(),
                tailwind_example: "bg-gradient-to-b from-secondary-50 to-white py-20 md:py-32 px-8 text-center".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&[
                    "Hospital Info",
                    "Departments",
                    "Patient Resources",
                    "Contact & Hours",
                ]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "의료법 준수사항", "환자권리장전"]),
                tailwind_example: "bg-gray-50 border-t-2 border-gray-200 py-16 px-8".to_string(),
            },

            sections: vec![
                Section::new(
                    "Services Overview",
                    "제공 진료과 및 서비스 안내",
                    "Icon grid, 4 columns on desktop, clear labels",
                    "py-20 px-8 grid md:grid-cols-4 gap-8",
                ),
                Section::new(
                    "Why Choose Us",
                    "병원의 강점과 전문성 전달",
                    "Feature list with icons, 3-column",
                    "bg-primary-50 py-20 px-8 grid md:grid-cols-3 gap-12",
                ),
                Section::new(
                    "Find a Doctor",
                    "의료진 검색 및 예약",
                    "Search bar + filtered card list",
                    "py-20 px-8 space-y-8",
                ),
                Section::new(
                    "Patient Portal CTA",
                    "온라인 진료 예약 유도",
                    "Centered card with step-by-step guide",
                    "bg-white py-20 px-8 max-w-4xl mx-auto",
                ),
                Section::new(
                    "Health Resources",
                    "건강 정보 제공으로 신뢰 구축",
                    "Blog-style card grid",
                    "py-20 px-8 grid md:grid-cols-3 gap-6",
                ),
                Section::new(
                    "Contact & Location",
                    "찾아오는 길 및 연락처",
                    "Map embed + contact details sidebar",
                    "py-20 px-8 grid md:grid-cols-5 gap-8",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#00A9E0"),
            secondary: generate_color_scale("#7AC142"),
            gray: generate_color_scale("#5A6C7D"),
            usage_rules: UsageRules {
                primary_use: "주요 CTA (예약하기), 링크, 중요 정보".to_string(),
                secondary_use: "건강/긍정 메시지, 성공 상태".to_string(),
                surface_bg: "white for forms, gray-50 for sections".to_string(),
                border: "gray-300 for clear separation (high clarity needed)".to_string(),
                text_strong: "gray-900 for headings and critical info".to_string(),
                text_weak: "gray-600 for body, gray-500 for helper text".to_string(),
            },
            accessibility_notes: strings(&[
                "모든 interactive 요소는 AAA 기준(7:1) 명도 대비 적용",
                "의료 정보는 최소 18px로 가독성 최우선",
                "color-blind friendly: 색상만으로 정보 구분 금지, 아이콘/텍스트 병행",
                "고령 사용자를 고려한 넉넉한 터치 영역(최소 48x48px)",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "Noto Sans KR (높은 가독성, 의료 정보 전달에 적합)".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("44px", 700, "1.3", "-0.01em"),
                h2: TypographyScale::new("36px", 600, "1.4", "0"),
                h3: TypographyScale::new("28px", 600, "1.4", "0"),
                body: TypographyScale::new("17px", 400, "1.7", "0"),
                caption: TypographyScale::new("15px", 400, "1.6", "0"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 52,
                    padding: "px-8 py-4".to_string(),
                    radius: "rounded-xl".to_string(),
                    bg: "bg-primary-600".to_string(),
                    text: "text-white font-semibold text-lg".to_string(),
                    hover: "hover:bg-primary-700 transition-colors duration-200".to_string(),
                    disabled: "disabled:bg-gray-300".to_string(),
                    tailwind: "bg-primary-600 text-white font-semibold text-lg px-8 py-4 rounded-xl hover:bg-primary-700 transition-colors duration-200".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 52,
                    padding: "px-8 py-4".to_string(),
                    radius: "rounded-xl".to_string(),
                    border: "border-2 border-primary-600".to_string(),
                    bg: None,
                    text: "text-primary-600 font-semibold text-lg".to_string(),
                    hover: "hover:bg-primary-50 transition-colors duration-200".to_string(),
                    disabled: "disabled:border-gray-300 disabled:text-gray-300".to_string(),
                    tailwind: "border-2 border-primary-600 text-primary-600 font-semibold text-lg px-8 py-4 rounded-xl hover:bg-primary-50".to_string(),
                },
            },
            input: Input {
                height_px: 52,
                radius: "rounded-xl".to_string(),
                border: "border-2 border-gray-300".to_string(),
                placeholder: "placeholder:text-gray-500 placeholder:text-base".to_string(),
                focus_ring: "focus:ring-4 focus:ring-primary-200 focus:border-primary-500".to_string(),
                tailwind: "w-full h-13 px-5 text-base border-2 border-gray-300 rounded-xl focus:ring-4 focus:ring-primary-200 focus:border-primary-500".to_string(),
            },
            card: Card {
                radius: "rounded-2xl".to_string(),
                padding: "p-8".to_string(),
                shadow: "shadow-lg".to_string(),
                border: "border-2 border-gray-200".to_string(),
                tailwind: "bg-white rounded-2xl p-8 border-2 border-gray-200 shadow-lg".to_string(),
            },
        },

        tailwind_mapping: TailwindMapping {
            tailwind_config_extend: TailwindConfigExtend {
                colors: TailwindColors {
                    primary: "colors.primary".to_string(),
                    secondary: "colors.secondary".to_string(),
                    gray: "colors.gray".to_string(),
                },
                font_family: TailwindFontFamily {
                    sans: strings(&["Pretendard", "system-ui"]),
                },
                aspect_ratio: None,
            },
            class_snippets: ClassSnippets {
                container: "max-w-[1400px] mx-auto px-8 lg:px-16".to_string(),
                header: "bg-white border-b-2 border-secondary-200 sticky top-0 z-50 h-20 flex items-center justify-between px-8".to_string(),
                hero: "bg-gradient-to-b from-secondary-50 to-white py-20 md:py-32 px-8 text-center".to_string(),
                primary_button: "bg-primary-600 text-white font-semibold text-lg px-8 py-4 rounded-xl hover:bg-primary-700".to_string(),
                secondary_button: "border-2 border-primary-600 text-primary-600 font-semibold text-lg px-8 py-4 rounded-xl hover:bg-primary-50".to_string(),
                card: "bg-white rounded-2xl p-8 border-2 border-gray-200 shadow-lg".to_string(),
                input: "w-full h-13 px-5 text-base border-2 border-gray-300 rounded-xl focus:ring-4 focus:ring-primary-200".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "Form validation은 실시간 피드백으로 에러 감소",
                "Loading state는 명확히 표시 (의료 예약은 critical action)",
                "고령 사용자를 위한 큰 텍스트와 넉넉한 spacing",
                "Emergency contact는 모든 페이지에서 접근 가능하게",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "primary가 차분한 청록색(#00A9E0)",
                    "의료 서비스는 신뢰와 청결함을 전달하는 파란 계열이 필수. 너무 강렬하지 않은 톤",
                ),
                VariationPoint::new(
                    "Typography",
                    "전체적으로 폰트 크기가 큼 (body 17px)",
                    "고령 환자와 시력이 낮은 사용자를 고려한 높은 가독성 확보",
                ),
                VariationPoint::new(
                    "Components",
                    "Button과 Input 높이가 52px로 높음",
                    "접근성 강화. 터치 오류 최소화 및 시니어 친화적 UI",
                ),
                VariationPoint::new(
                    "Layout",
                    "Spacing이 넉넉함 (32px gutter)",
                    "복잡한 의료 정보를 명확히 구분하고 인지 부담 감소",
                ),
                VariationPoint::new(
                    "Accessibility",
                    "AAA 기준 적용",
                    "의료 정보는 법적으로도 높은 접근성 요구. 장애인, 고령자 필수 고려",
                ),
            ],
            unchanged_principles: strings(&[
                "반응형 12-column grid는 업종 무관 표준",
                "Mobile-first 설계 원칙",
                "일관된 spacing scale로 시각적 리듬 유지",
                "사용자 중심의 정보 구조",
            ]),
        },
    }
}
