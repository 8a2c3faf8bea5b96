//! 피트니스 (fitness & sports) preset.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn fitness_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "피트니스".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["에너지", "동기부여", "목표", "성취", "건강"]),
            target_feeling: "운동을 시작하고 목표를 달성하게 만드는 동기부여".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "💪 Workout Components",
                "📊 Progress Tracking",
                "📱 Mobile Fitness",
                "🏅 Achievements",
            ]),
            naming_rule: "Component/Type/State (예: WorkoutCard/Strength/InProgress)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 20px gutter".to_string(),
                spacing_scale: vec![4, 8, 12, 16, 20, 24, 32, 40, 48],
                radius_scale: vec![8, 12, 16, 20, 24],
                type_scale_tokens: strings(&[
                    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl",
                    "text-3xl", "text-4xl",
                ]),
                breakpoints: strings(&["mobile: 375px", "tablet: 768px", "desktop: 1280px"]),
            },
        },

        layout: Layout {
            header: LayoutHeader {
                height_px: 64,
                structure: strings(&[
                    "Logo",
                    "Workouts",
                    "Programs",
                    "Community",
                    "Progress",
                    "Profile",
                ]),
                sticky_behavior: "sticky with progress bar".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-6 lg:px-10".to_string(),
                    max_width: "max-w-7xl".to_string(),
                    nav_items: 6,
                },
                mobile: HeaderMobile {
                    pattern: "Bottom navigation with quick-start".to_string(),
                    height_px: 56,
                },
                tailwind_example: "bg-white border-b border-gray-200 sticky top-0 z-50 h-16 flex items-center justify-between px-6".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "Motivational Image",
                    "Today's Challenge",
                    "Quick Start Buttons",
                    "Streak Counter",
                ]),
                desktop_grid: "split 50/50 image and action panel".to_string(),
                mobile_stack: "vertical with prominent start button".to_string(),
                padding: "py-16 lg:py-24".to_string(),
                background: "Active lifestyle photography with energy".to_string(),
                image_style: "Athletic, motivational, diverse people working out".to_string(),
                tailwind_example: "bg-gradient-to-br from-green-500 to-emerald-600 py-20 px-6".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&["Programs", "Support", "Community", "Social"]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "운동 주의사항", "구독 관리"]),
                tailwind_example: "bg-gray-900 text-gray-300 py-16 px-6 mt-20".to_string(),
            },

            sections: vec![
                Section::new(
                    "Today's Workout",
                    "오늘 운동 시작 유도",
                    "Large card with countdown timer",
                    "py-20 px-6 max-w-5xl mx-auto",
                ),
                Section::new(
                    "Progress Dashboard",
                    "성과 시각화로 동기부여",
                    "Charts and stats grid",
                    "bg-white py-16 px-6 grid md:grid-cols-3 gap-6",
                ),
                Section::new(
                    "Popular Programs",
                    "프로그램 구독 유도",
                    "Horizontal scroll with difficulty badges",
                    "py-16 px-6 overflow-x-auto flex gap-6",
                ),
                Section::new(
                    "Success Stories",
                    "Before/After로 동기부여",
                    "Transformation cards with testimonials",
                    "bg-gray-50 py-20 px-6 grid md:grid-cols-2 gap-8",
                ),
                Section::new(
                    "Free Trial CTA",
                    "무료 체험 가입 유도",
                    "Full-width with benefits list",
                    "bg-gradient-to-r from-green-600 to-emerald-600 py-20 px-6 text-white text-center",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#10B981"),
            secondary: generate_color_scale("#F59E0B"),
            gray: generate_color_scale("#6B7280"),
            usage_rules: UsageRules {
                primary_use: "Start Workout, 목표 달성, 진행 상태".to_string(),
                secondary_use: "칼로리 소모, 경고, 주의사항".to_string(),
                surface_bg: "white for clean tracking interface".to_string(),
                border: "gray-200 for card separation".to_string(),
                text_strong: "gray-900 for metrics".to_string(),
                text_weak: "gray-600 for labels".to_string(),
            },
            accessibility_notes: strings(&[
                "진행 상태는 색상뿐 아니라 숫자/아이콘으로도 표시",
                "동영상은 자막 제공",
                "타이머는 시각/청각 모두 피드백",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "Inter (숫자 가독성 우수)".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("52px", 800, "1.1", "-0.02em"),
                h2: TypographyScale::new("38px", 700, "1.2", "-0.01em"),
                h3: TypographyScale::new("28px", 700, "1.3", "0"),
                body: TypographyScale::new("16px", 400, "1.6", "0"),
                caption: TypographyScale::new("14px", 500, "1.5", "0"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 56,
                    padding: "px-10 py-4".to_string(),
                    radius: "rounded-2xl".to_string(),
                    bg: "bg-gradient-to-r from-green-600 to-emerald-600".to_string(),
                    text: "text-white font-bold text-lg".to_string(),
                    hover: "hover:from-green-700 hover:to-emerald-700 hover:shadow-xl transition-all duration-200".to_string(),
                    disabled: "disabled:from-gray-300 disabled:to-gray-300".to_string(),
                    tailwind: "bg-gradient-to-r from-green-600 to-emerald-600 text-white font-bold text-lg px-10 py-4 rounded-2xl hover:from-green-700 hover:to-emerald-700 hover:shadow-xl transition-all".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 56,
                    padding: "px-10 py-4".to_string(),
                    radius: "rounded-2xl".to_string(),
                    border: "border-2 border-green-600".to_string(),
                    bg: None,
                    text: "text-green-600 font-bold text-lg".to_string(),
                    hover: "hover:bg-green-50 transition-colors duration-200".to_string(),
                    disabled: "disabled:border-gray-300 disabled:text-gray-300".to_string(),
                    tailwind: "border-2 border-green-600 text-green-600 font-bold text-lg px-10 py-4 rounded-2xl hover:bg-green-50".to_string(),
                },
            },
            input: Input {
                height_px: 48,
                radius: "rounded-xl".to_string(),
                border: "border-2 border-gray-300".to_string(),
                placeholder: "placeholder:text-gray-400".to_string(),
                focus_ring: "focus:ring-2 focus:ring-green-500 focus:border-green-500".to_string(),
                tailwind: "w-full h-12 px-4 text-base border-2 border-gray-300 rounded-xl focus:ring-2 focus:ring-green-500".to_string(),
            },
            card: Card {
                radius: "rounded-2xl".to_string(),
                padding: "p-6".to_string(),
                shadow: "shadow-md hover:shadow-xl transition-all duration-300".to_string(),
                border: "border border-gray-200".to_string(),
                tailwind: "bg-white rounded-2xl p-6 border border-gray-200 shadow-md hover:shadow-xl transition-all".to_string(),
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
                container: "max-w-7xl mx-auto px-6 lg:px-10".to_string(),
                header: "bg-white border-b border-gray-200 sticky top-0 z-50 h-16 flex items-center justify-between px-6".to_string(),
                hero: "bg-gradient-to-br from-green-500 to-emerald-600 py-20 px-6".to_string(),
                primary_button: "bg-gradient-to-r from-green-600 to-emerald-600 text-white font-bold text-lg px-10 py-4 rounded-2xl hover:shadow-xl transition-all".to_string(),
                secondary_button: "border-2 border-green-600 text-green-600 font-bold text-lg px-10 py-4 rounded-2xl hover:bg-green-50".to_string(),
                card: "bg-white rounded-2xl p-6 border border-gray-200 shadow-md hover:shadow-xl transition-all".to_string(),
                input: "w-full h-12 px-4 text-base border-2 border-gray-300 rounded-xl focus:ring-2 focus:ring-green-500".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "Progress chart는 Chart.js 또는 Recharts 활용",
                "운동 동영상은 반응형 16:9 비율",
                "타이머는 Web API로 정확한 시간 추적",
                "실시간 칼로리는 WebSocket 또는 polling",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "활기찬 그린 계열 (#10B981)",
                    "피트니스는 건강, 성장, 에너지를 상징하는 그린. 동기부여 효과",
                ),
                VariationPoint::new(
                    "Typography",
                    "Bold 강조 (700-800 weight)",
                    "강인함과 의지를 표현. 운동의 에너지",
                ),
                VariationPoint::new(
                    "Components",
                    "큰 버튼 (56px height)",
                    "운동 중 터치하기 쉬운 크기",
                ),
                VariationPoint::new(
                    "Layout",
                    "Progress Dashboard 섹션",
                    "성과 시각화로 지속적인 동기부여",
                ),
            ],
            unchanged_principles: strings(&[
                "반응형 grid 시스템",
                "접근성 기준 준수",
                "Mobile-first 접근",
                "일관된 spacing",
            ]),
        },
    }
}
