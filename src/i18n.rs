//! Fixed interface labels. Content strings come from the documents; these
//! are the headings, buttons and notifications around them.

use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    SiteTitle,
    // nav
    NavAbout,
    NavProjects,
    NavSkills,
    NavExperience,
    NavContact,
    SwitchLanguage,
    // hero
    Available,
    CtaContact,
    CtaCv,
    ScrollExplore,
    RemoteWork,
    LoadingPortfolio,
    // about
    AboutTitle,
    AboutIntro,
    AboutEducation,
    AboutLanguages,
    AboutCertificates,
    Graduation,
    ViewCertificate,
    // expertise
    AiExpertise,
    NetworkExpertise,
    Education,
    Languages,
    Certifications,
    ExpectedGraduation,
    CertificationsSoon,
    // projects
    ProjectsTitle,
    ProjectsSubtitle,
    SearchProjects,
    AllProjects,
    Code,
    Live,
    NoProjects,
    LoadingProjects,
    // skills
    SkillsTitle,
    SkillsAiMl,
    SkillsWeb,
    SkillsProgramming,
    SkillsDatabases,
    SkillsLibraries,
    SkillsTools,
    SkillsFrameworks,
    // experience
    ExperienceTitle,
    ExperienceSubtitle,
    KeyAchievements,
    LoadingExperience,
    // contact
    ContactTitle,
    ContactDescription,
    Email,
    Phone,
    WhatsApp,
    Location,
    Socials,
    Open,
    Copy,
    Copied,
    CopiedToast,
    FormName,
    FormNamePlaceholder,
    FormEmail,
    FormEmailPlaceholder,
    FormSubject,
    FormSubjectPlaceholder,
    FormMessage,
    FormMessagePlaceholder,
    FormSend,
    RequiredFields,
    OpeningMail,
    Footer,
    BackToTop,
    RightsReserved,
}

impl Msg {
    pub fn tr(self, locale: Locale) -> &'static str {
        let (en, ar) = self.pair();
        match locale {
            Locale::En => en,
            Locale::Ar => ar,
        }
    }

    /// Title for a skill category key from the profile document.
    pub fn skill_category(key: &str) -> Option<Msg> {
        Some(match key {
            "ai_ml" => Msg::SkillsAiMl,
            "webDevelopment" => Msg::SkillsWeb,
            "programmingLanguages" => Msg::SkillsProgramming,
            "databases" => Msg::SkillsDatabases,
            "libraries" => Msg::SkillsLibraries,
            "tools" => Msg::SkillsTools,
            "frameworks" => Msg::SkillsFrameworks,
            _ => return None,
        })
    }

    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Msg::SiteTitle => ("Portfolio", "معرض الأعمال"),
            Msg::NavAbout => ("About Me", "نبذة عني"),
            Msg::NavProjects => ("Projects", "المشاريع"),
            Msg::NavSkills => ("Skills", "المهارات"),
            Msg::NavExperience => ("Experience", "الخبرة"),
            Msg::NavContact => ("Contact", "اتصل بي"),
            // labelled with the language it switches to
            Msg::SwitchLanguage => ("العربية", "English"),
            Msg::Available => ("Available for Work", "متاح للعمل"),
            Msg::CtaContact => ("Get in touch", "تواصل معي"),
            Msg::CtaCv => ("Download CV", "تحميل السيرة الذاتية"),
            Msg::ScrollExplore => ("Scroll to explore", "مرر للأسفل للاستكشاف"),
            Msg::RemoteWork => ("Available for remote work", "متاح للعمل عن بعد"),
            Msg::LoadingPortfolio => ("Loading portfolio...", "جاري تحميل الملف..."),
            Msg::AboutTitle => ("About Me", "نبذة عني"),
            Msg::AboutIntro => ("Professional Overview", "نظرة عامة"),
            Msg::AboutEducation => ("Academic Background", "الخلفية الأكاديمية"),
            Msg::AboutLanguages => ("Linguistic Proficiency", "الكفاءة اللغوية"),
            Msg::AboutCertificates => ("Professional Certifications", "الشهادات المهنية"),
            Msg::Graduation => ("Graduation", "التخرج"),
            Msg::ViewCertificate => ("View", "عرض"),
            Msg::AiExpertise => ("AI Expertise", "الذكاء الاصطناعي"),
            Msg::NetworkExpertise => ("Network Expertise", "الشبكات"),
            Msg::Education => ("Education", "التعليم"),
            Msg::Languages => ("Languages", "اللغات"),
            Msg::Certifications => ("Certifications", "الشهادات"),
            Msg::ExpectedGraduation => ("Expected Graduation:", "تاريخ التخرج المتوقع:"),
            Msg::CertificationsSoon => (
                "Certifications will be added soon...",
                "سيتم إضافة الشهادات قريباً...",
            ),
            Msg::ProjectsTitle => ("Featured Projects", "المشاريع المميزة"),
            Msg::ProjectsSubtitle => (
                "Explore my portfolio of diverse projects built with modern technologies and best practices",
                "استكشف مجموعة متنوعة من المشاريع التي قمت ببنائها باستخدام أحدث التقنيات وأفضل الممارسات",
            ),
            Msg::SearchProjects => ("Search projects...", "البحث في المشاريع..."),
            Msg::AllProjects => ("All Projects", "كل المشاريع"),
            Msg::Code => ("Code", "الكود"),
            Msg::Live => ("Live", "مباشر"),
            Msg::NoProjects => (
                "No projects found matching your search",
                "لم يتم العثور على مشاريع تطابق بحثك",
            ),
            Msg::LoadingProjects => ("Loading projects...", "جاري تحميل المشاريع..."),
            Msg::SkillsTitle => ("Technical Expertise", "الخبرات التقنية"),
            Msg::SkillsAiMl => ("AI & Machine Learning", "الذكاء الاصطناعي"),
            Msg::SkillsWeb => ("Web Development", "تطوير الويب"),
            Msg::SkillsProgramming => ("Programming Languages", "لغات البرمجة"),
            Msg::SkillsDatabases => ("Databases", "قواعد البيانات"),
            Msg::SkillsLibraries => ("Technical Libraries", "المكتبات التقنية"),
            Msg::SkillsTools => ("Development Tools", "أدوات التطوير"),
            Msg::SkillsFrameworks => ("Frameworks & Libraries", "الأطر والمكتبات"),
            Msg::ExperienceTitle => ("Professional Journey", "المسيرة المهنية"),
            Msg::ExperienceSubtitle => (
                "My professional journey and academic background",
                "مسيرتي المهنية وخلفيتي الأكاديمية",
            ),
            Msg::KeyAchievements => ("Key Achievements", "أبرز الإنجازات"),
            Msg::LoadingExperience => ("Loading experience...", "جاري تحميل الخبرات..."),
            Msg::ContactTitle => ("Get In Touch", "تواصل معي"),
            Msg::ContactDescription => (
                "I'm always interested in hearing about new projects and opportunities. Feel free to reach out!",
                "أنا مهتم دائماً بسماع أخبار المشاريع والفرص الجديدة. لا تتردد في التواصل معي!",
            ),
            Msg::Email => ("Email", "البريد الإلكتروني"),
            Msg::Phone => ("Phone", "الهاتف"),
            Msg::WhatsApp => ("WhatsApp", "واتساب"),
            Msg::Location => ("Location", "الموقع"),
            Msg::Socials => ("Social Media", "وسائل التواصل الاجتماعي"),
            Msg::Open => ("Open", "فتح"),
            Msg::Copy => ("Copy", "نسخ"),
            Msg::Copied => ("Copied!", "تم النسخ!"),
            Msg::CopiedToast => ("Copied to clipboard!", "تم النسخ بنجاح!"),
            Msg::FormName => ("Full Name", "الاسم الكامل"),
            Msg::FormNamePlaceholder => ("Your name", "أدخل اسمك"),
            Msg::FormEmail => ("Email Address", "البريد الإلكتروني"),
            Msg::FormEmailPlaceholder => ("name@example.com", "name@example.com"),
            Msg::FormSubject => ("Subject", "الموضوع"),
            Msg::FormSubjectPlaceholder => ("How can I help?", "كيف يمكنني مساعدتك؟"),
            Msg::FormMessage => ("Message", "الرسالة"),
            Msg::FormMessagePlaceholder => ("Write your message here...", "اكتب رسالتك هنا..."),
            Msg::FormSend => ("Send Message", "إرسال الرسالة"),
            Msg::RequiredFields => (
                "Please fill in all required fields",
                "يرجى ملء جميع الحقول المطلوبة",
            ),
            Msg::OpeningMail => ("Opening mail client...", "جاري فتح تطبيق البريد..."),
            Msg::Footer => (
                "Ready to collaborate? Let's discuss your project and how I can help bring your ideas to life.",
                "جاهز للتعاون؟ دعنا نناقش مشروعك وكيف يمكنني المساعدة في تحويل أفكارك إلى واقع.",
            ),
            Msg::BackToTop => ("Back to Top", "العودة للأعلى"),
            Msg::RightsReserved => ("All rights reserved.", "جميع الحقوق محفوظة"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tr_picks_locale() {
        assert_eq!(Msg::NavProjects.tr(Locale::En), "Projects");
        assert_eq!(Msg::NavProjects.tr(Locale::Ar), "المشاريع");
        assert_eq!(Msg::SwitchLanguage.tr(Locale::En), "العربية");
    }

    #[test]
    fn test_skill_category_titles() {
        assert_eq!(Msg::skill_category("tools"), Some(Msg::SkillsTools));
        assert_eq!(Msg::skill_category("cloud"), None);
        for key in crate::content::profile::SKILL_CATEGORY_ORDER {
            assert!(Msg::skill_category(key).is_some(), "no title for {key}");
        }
    }
}
