//! 교육 (education) preset.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn education_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "교육".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["학습", "성장", "친근함", "동기부여", "명확성"]),
            target_feeling: "학습에 대한 동기를 부여하고 쉽게 접근할 수 있는 교육 플랫폼".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "📚 Learning Components",
                "📊 Dashboard & Progress",
                "📱 Mobile Learning",
                "🎓 Course Pages",
            ]),
            naming_rule: "Component/Type/State (예: CourseCard/Featured/Active)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 24px gutter".to_string(),
                spacing_scale: vec![4, 8, 12, 16, 24, 32, 40, 48, 64, 80],
                radius_scale: vec![8, 12, 16, 20, 24],
                type_scale_tokens: strings(&[
                    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl",
                    "text-3xl", "text-4xl",
                ]),
                breakpoints: strings(&[
                    "mobile: 375px",
                    "tablet: 768px",
                    "desktop: 1280px",
                    "wide: 1600px",
                ]),
            },
        },

        layout: Layout {
            header: LayoutHeader {
                height_px: 68,
                structure: strings(&["Logo", "Courses", "My Learning", "Search", "Profile"]),
                sticky_behavior: "sticky with smooth transition".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-6 lg:px-12".to_string(),
                    max_width: "max-w-[1400px]".to_string(),
                    nav_items: 5,
                },
                mobile: HeaderMobile {
                    pattern: "Bottom tab navigation".to_string(),
                    height_px: 64,
                },
                tailwind_example: "bg-white shadow-sm sticky top-0 z-50 h-17 flex items-center justify-between px-6".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "Headline",
                    "Description",
                    "Search Bar",
                    "Category Tags",
                    "Featured Courses",
                ]),
                desktop_grid: "Centered with search focus".to_string(),
                mobile_stack: "vertical, search prominent".to_string(),
                padding: "py-16 md:py-24".to_string(),
                background: "Soft gradient with playful elements".to_string(),
                image_style: "Friendly illustrations, diverse students".to_string(),
                tailwind_example: "bg-gradient-to-br from-blue-50 via-purple-50 to-pink-50 py-16 md:py-24 px-6".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&["About", "Categories", "Support", "Community"]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "환불정책", "저작권정책"]),
                tailwind_example: "bg-gray-50 py-12 px-6 mt-20 border-t border-gray-200".to_string(),
            },

            sections: vec![
                Section::new(
                    "Popular Courses",
                    "인기 강의로 사용자 유입",
                    "3-4 column grid with course cards",
                    "py-16 px-6 grid md:grid-cols-3 lg:grid-cols-4 gap-6",
                ),
                Section::new(
                    "Learning Paths",
                    "체계적인 학습 경로 제시",
                    "Horizontal scroll cards with progress indicators",
                    "py-16 px-6 overflow-x-auto flex gap-6",
                ),
                Section::new(
                    "Instructor Showcase",
                    "강사 신뢰도 구축",
                    "Profile cards with credentials",
                    "bg-white py-16 px-6 grid md:grid-cols-4 gap-8",
                ),
                Section::new(
                    "Student Success Stories",
                    "학습 성과 증명",
                    "Testimonial cards with before/after",
                    "py-16 px-6 grid md:grid-cols-3 gap-6",
                ),
                Section::new(
                    "Free Trial CTA",
                    "무료 체험 신청 유도",
                    "Centered with benefit highlights",
                    "bg-gradient-to-r from-blue-600 to-purple-600 text-white py-20 px-6 text-center",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#3B82F6"),
            secondary: generate_color_scale("#10B981"),
            gray: generate_color_scale("#6B7280"),
            usage_rules: UsageRules {
                primary_use: "주요 CTA, 진행 상태, 링크".to_string(),
                secondary_use: "완료/성공 상태, 긍정적 피드백".to_string(),
                surface_bg: "white for cards, gray-50 for sections".to_string(),
                border: "gray-200 for subtle division".to_string(),
                text_strong: "gray-900 for headings".to_string(),
                text_weak: "gray-600 for descriptions".to_string(),
            },
            accessibility_notes: strings(&[
                "진행률 표시는 색상+숫자 병행으로 색맹 대응",
                "모든 interactive 요소는 AA 기준 충족",
                "학습 콘텐츠는 읽기 쉬운 명도 대비 유지",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "Noto Sans KR (교육 콘텐츠 가독성 우수)".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("42px", 700, "1.2", "-0.02em"),
                h2: TypographyScale::new("32px", 600, "1.3", "-0.01em"),
                h3: TypographyScale::new("24px", 600, "1.4", "0"),
                body: TypographyScale::new("16px", 400, "1.7", "0"),
                caption: TypographyScale::new("14px", 400, "1.5", "0"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 48,
                    padding: "px-6 py-3".to_string(),
                    radius: "rounded-xl".to_string(),
                    bg: "bg-primary-600".to_string(),
                    text: "text-white font-semibold".to_string(),
                    hover: "hover:bg-primary-700 hover:shadow-lg transition-all duration-200".to_string(),
                    disabled: "disabled:bg-gray-300".to_string(),
                    tailwind: "bg-primary-600 text-white font-semibold px-6 py-3 rounded-xl hover:bg-primary-700 hover:shadow-lg transition-all".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 48,
                    padding: "px-6 py-3".to_string(),
                    radius: "rounded-xl".to_string(),
                    border: "border-2 border-primary-600".to_string(),
                    bg: None,
                    text: "text-primary-600 font-semibold".to_string(),
                    hover: "hover:bg-primary-50 transition-colors duration-200".to_string(),
                    disabled: "disabled:border-gray-300 disabled:text-gray-300".to_string(),
                    tailwind: "border-2 border-primary-600 text-primary-600 font-semibold px-6 py-3 rounded-xl hover:bg-primary-50".to_string(),
                },
            },
            input: Input {
                height_px: 48,
                radius: "rounded-xl".to_string(),
                border: "border-2 border-gray-300".to_string(),
                placeholder: "placeholder:text-gray-400".to_string(),
                focus_ring: "focus:ring-2 focus:ring-primary-500 focus:border-primary-500".to_string(),
                tailwind: "w-full h-12 px-4 border-2 border-gray-300 rounded-xl focus:ring-2 focus:ring-primary-500".to_string(),
            },
            card: Card {
                radius: "rounded-2xl".to_string(),
                padding: "p-6".to_string(),
                shadow: "shadow-md hover:shadow-xl transition-shadow duration-300".to_string(),
                border: "border border-gray-200".to_string(),
                tailwind: "bg-white rounded-2xl p-6 border border-gray-200 shadow-md hover:shadow-xl transition-shadow".to_string(),
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
                container: "max-w-[1400px] mx-auto px-6 lg:px-12".to_string(),
                header: "bg-white shadow-sm sticky top-0 z-50 h-17 flex items-center justify-between px-6".to_string(),
                hero: "bg-gradient-to-br from-blue-50 via-purple-50 to-pink-50 py-16 md:py-24 px-6".to_string(),
                primary_button: "bg-primary-600 text-white font-semibold px-6 py-3 rounded-xl hover:bg-primary-700 hover:shadow-lg transition-all".to_string(),
                secondary_button: "border-2 border-primary-600 text-primary-600 font-semibold px-6 py-3 rounded-xl hover:bg-primary-50".to_string(),
                card: "bg-white rounded-2xl p-6 border border-gray-200 shadow-md hover:shadow-xl transition-shadow".to_string(),
                input: "w-full h-12 px-4 border-2 border-gray-300 rounded-xl focus:ring-2 focus:ring-primary-500".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "진행률 표시는 progress bar 컴포넌트로 시각화",
                "Course card에 hover 시 확대 효과로 인터랙션",
                "모바일에서 bottom navigation으로 접근성 향상",
                "Search 기능은 autocomplete로 UX 개선",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "primary가 밝은 파란색(#3B82F6)",
                    "교육은 학습과 성장을 상징하는 밝고 친근한 파란색. 동기부여와 신뢰감",
                ),
                VariationPoint::new(
                    "Layout",
                    "Learning Paths 섹션 추가",
                    "체계적인 학습 경로 제시로 장기 수강 유도",
                ),
                VariationPoint::new(
                    "Components",
                    "진행률 표시 컴포넌트 강조",
                    "학습 진도 시각화로 성취감과 지속성 향상",
                ),
                VariationPoint::new(
                    "Typography",
                    "Line height 1.7로 높음",
                    "교육 콘텐츠는 장시간 읽기 편한 넉넉한 행간 필요",
                ),
            ],
            unchanged_principles: strings(&[
                "반응형 grid 시스템",
                "접근성 기준 준수",
                "Mobile-first 접근",
                "일관된 spacing scale",
            ]),
        },
    }
}
