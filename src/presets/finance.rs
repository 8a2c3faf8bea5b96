//! 금융 (finance) preset.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn finance_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "금융".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["신뢰성", "안정감", "전문성", "보안", "명확성"]),
            target_feeling: "사용자에게 안전하고 믿을 수 있는 금융 서비스라는 확신을 제공".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "📱 Components",
                "📄 Templates - Desktop",
                "📱 Templates - Mobile",
                "🔍 Use Cases",
            ]),
            naming_rule: "Component/Variant/State 구조 (예: Button/Primary/Hover)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 24px gutter".to_string(),
                spacing_scale: vec![4, 8, 12, 16, 24, 32, 48, 64, 96, 128],
                radius_scale: vec![4, 8, 12, 16, 24],
                type_scale_tokens: strings(&[
                    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl",
                    "text-3xl", "text-4xl",
                ]),
                breakpoints: strings(&[
                    "mobile: 375px",
                    "tablet: 768px",
                    "desktop: 1280px",
                    "wide: 1920px",
                ]),
            },
        },

        layout: Layout {
            header: LayoutHeader {
                height_px: 72,
                structure: strings(&["Logo", "Navigation", "Search", "User Menu", "CTA"]),
                sticky_behavior: "sticky top-0 with shadow on scroll".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-6 lg:px-12".to_string(),
                    max_width: "max-w-[1440px]".to_string(),
                    nav_items: 6,
                },
                mobile: HeaderMobile {
                    pattern: "Hamburger menu with drawer".to_string(),
                    height_px: 64,
                },
                tailwind_example: "bg-white border-b border-gray-200 sticky top-0 z-50 h-18 flex items-center justify-between px-6 lg:px-12".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "Headline",
                    "Subheadline",
                    "Primary CTA",
                    "Secondary CTA",
                    "Trust Indicators",
                ]),
                desktop_grid: "2-column (60% text, 40% visual)".to_string(),
                mobile_stack: "vertical stack, text-first".to_string(),
                padding: "py-16 md:py-24 lg:py-32".to_string(),
                background: "gradient from primary-50 to white".to_string(),
                image_style: "Clean dashboard mockup or abstract financial graphics".to_string(),
                tailwind_example: "bg-gradient-to-b from-primary-50 to-white py-16 md:py-24 lg:py-32 px-6".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&[
                    "Logo & Description",
                    "Links (4 columns)",
                    "Social Media",
                    "Legal & Compliance",
                ]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "금융소비자보호", "예금자보호안내"]),
                tailwind_example: "bg-gray-900 text-gray-300 py-12 px-6 mt-24".to_string(),
            },

            sections: vec![
                Section::new(
                    "Features Section",
                    "핵심 금융 서비스 기능을 명확하게 전달",
                    "3-column grid on desktop, single column on mobile, icon + title + description",
                    "py-20 px-6 grid md:grid-cols-3 gap-8",
                ),
                Section::new(
                    "Security & Trust",
                    "보안 인증 및 신뢰 지표 강조",
                    "Centered badge layout with logos of certifications",
                    "bg-gray-50 py-16 px-6 flex flex-wrap justify-center gap-8 items-center",
                ),
                Section::new(
                    "Testimonials",
                    "실제 사용자 후기로 신뢰도 강화",
                    "Card carousel, 3 cards visible on desktop",
                    "py-20 px-6 overflow-x-auto flex gap-6 snap-x",
                ),
                Section::new(
                    "CTA Section",
                    "회원가입 또는 상담 신청 유도",
                    "Centered with strong primary button",
                    "bg-primary-600 text-white py-20 px-6 text-center",
                ),
                Section::new(
                    "FAQ",
                    "자주 묻는 질문으로 이탈 방지",
                    "Accordion list, max 2 columns on desktop",
                    "py-20 px-6 max-w-4xl mx-auto",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#0052CC"),
            secondary: generate_color_scale("#00875A"),
            gray: generate_color_scale("#42526E"),
            usage_rules: UsageRules {
                primary_use: "주요 CTA, 링크, 중요 정보 강조".to_string(),
                secondary_use: "성공 메시지, 보조 액션, 긍정적 피드백".to_string(),
                surface_bg: "gray-50 for sections, white for cards".to_string(),
                border: "gray-200 for default, gray-300 for emphasis".to_string(),
                text_strong: "gray-900 for headings".to_string(),
                text_weak: "gray-600 for body, gray-500 for captions".to_string(),
            },
            accessibility_notes: strings(&[
                "모든 텍스트는 WCAG 2.1 AA 기준 4.5:1 이상의 명도 대비 유지",
                "Primary-600과 white 조합은 7.2:1로 AAA 기준 충족",
                "Interactive 요소는 최소 44x44px 터치 영역 확보",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "IBM Plex Sans (금융권 전문성 강조 시 추천)".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("48px", 700, "1.2", "-0.02em"),
                h2: TypographyScale::new("36px", 700, "1.3", "-0.01em"),
                h3: TypographyScale::new("24px", 600, "1.4", "0"),
                body: TypographyScale::new("16px", 400, "1.6", "0"),
                caption: TypographyScale::new("14px", 400, "1.5", "0"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 48,
                    padding: "px-6 py-3".to_string(),
                    radius: "rounded-lg".to_string(),
                    bg: "bg-primary-600".to_string(),
                    text: "text-white font-semibold".to_string(),
                    hover: "hover:bg-primary-700 transition-colors duration-200".to_string(),
                    disabled: "disabled:bg-gray-300 disabled:cursor-not-allowed".to_string(),
                    tailwind: "bg-primary-600 text-white font-semibold px-6 py-3 rounded-lg hover:bg-primary-700 transition-colors duration-200 disabled:bg-gray-300".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 48,
                    padding: "px-6 py-3".to_string(),
                    radius: "rounded-lg".to_string(),
                    border: "border-2 border-primary-600".to_string(),
                    bg: None,
                    text: "text-primary-600 font-semibold".to_string(),
                    hover: "hover:bg-primary-50 transition-colors duration-200".to_string(),
                    disabled: "disabled:border-gray-300 disabled:text-gray-300 disabled:cursor-not-allowed".to_string(),
                    tailwind: "border-2 border-primary-600 text-primary-600 font-semibold px-6 py-3 rounded-lg hover:bg-primary-50 transition-colors duration-200".to_string(),
                },
            },
            input: Input {
                height_px: 48,
                radius: "rounded-lg".to_string(),
                border: "border border-gray-300".to_string(),
                placeholder: "placeholder:text-gray-500".to_string(),
                focus_ring: "focus:ring-2 focus:ring-primary-500 focus:border-transparent".to_string(),
                tailwind: "w-full h-12 px-4 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent placeholder:text-gray-500".to_string(),
            },
            card: Card {
                radius: "rounded-xl".to_string(),
                padding: "p-6".to_string(),
                shadow: "shadow-md hover:shadow-lg transition-shadow duration-200".to_string(),
                border: "border border-gray-200".to_string(),
                tailwind: "bg-white rounded-xl p-6 border border-gray-200 shadow-md hover:shadow-lg transition-shadow duration-200".to_string(),
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
                container: "max-w-[1440px] mx-auto px-6 lg:px-12".to_string(),
                header: "bg-white border-b border-gray-200 sticky top-0 z-50 h-18 flex items-center justify-between px-6 lg:px-12".to_string(),
                hero: "bg-gradient-to-b from-primary-50 to-white py-16 md:py-24 lg:py-32 px-6".to_string(),
                primary_button: "bg-primary-600 text-white font-semibold px-6 py-3 rounded-lg hover:bg-primary-700 transition-colors duration-200".to_string(),
                secondary_button: "border-2 border-primary-600 text-primary-600 font-semibold px-6 py-3 rounded-lg hover:bg-primary-50 transition-colors duration-200".to_string(),
                card: "bg-white rounded-xl p-6 border border-gray-200 shadow-md hover:shadow-lg transition-shadow duration-200".to_string(),
                input: "w-full h-12 px-4 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "tailwind.config.js에서 colors 확장 필수",
                "Pretendard 폰트는 CDN 또는 local import 필요",
                "focus-visible 사용으로 키보드 네비게이션 접근성 개선",
                "transition 클래스는 사용자 인터랙션 피드백에 필수",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "primary 색상이 파란 계열(#0052CC)",
                    "금융권은 신뢰와 안정을 상징하는 파란색이 필수. 보수적이고 전문적인 이미지 전달",
                ),
                VariationPoint::new(
                    "Typography",
                    "font-weight가 전반적으로 높음(h1: 700)",
                    "중요한 숫자와 정보를 명확히 인지시키기 위해 Bold 사용 빈도 증가",
                ),
                VariationPoint::new(
                    "Layout",
                    "Footer에 법적 고지 섹션 강조",
                    "금융권은 금융감독원 규제로 인해 이용약관, 예금자보호 등 법적 정보 노출 의무",
                ),
                VariationPoint::new(
                    "Components",
                    "Button radius가 상대적으로 보수적(8px)",
                    "지나치게 둥근 버튼은 신뢰도를 낮출 수 있어 절제된 라운드 사용",
                ),
                VariationPoint::new(
                    "Sections",
                    "Security & Trust 섹션 추가",
                    "인증마크, 보안 배지 등이 전환율에 직접적 영향을 미치는 업종 특성",
                ),
            ],
            unchanged_principles: strings(&[
                "12-column grid 시스템은 업종 무관하게 유지 (반응형 표준)",
                "8px 기반 spacing scale은 일관된 시각적 리듬 제공",
                "WCAG 2.1 AA 접근성 기준은 모든 업종에서 준수",
                "Mobile-first 설계 원칙은 업종과 무관한 현대 웹 표준",
            ]),
        },
    }
}
