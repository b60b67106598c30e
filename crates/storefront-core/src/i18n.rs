//! Localized Messages
//!
//! Every user-visible string goes through [`Message::text`]. Arabic is the
//! storefront's primary language; English is kept as a second table.

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    /// Parse a language code, falling back to Arabic
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Language::En,
            _ => Language::Ar,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Text direction for the document root
    pub fn dir(self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En => "ltr",
        }
    }
}

/// Every string the pages can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Validation
    FillAllFields,
    InvalidEmail,
    NameTooShort,
    InvalidPhone,
    PasswordTooShort,
    PasswordMismatch,

    // Login
    LoginFailed,
    LoginUnreachable,
    SignIn,
    SigningIn,
    NoAccount,

    // Registration
    RegistrationFailed,
    RegistrationUnreachable,
    RegistrationSucceeded,
    CreateAccount,
    CreatingAccount,
    HaveAccount,

    // Form labels
    NameLabel,
    EmailLabel,
    PhoneLabel,
    PasswordLabel,
    ConfirmPasswordLabel,

    // Catalog
    Loading,
    ProductsUnavailable,
    NoProducts,
    AddToCart,
    Retry,
    Search,
    SearchPlaceholder,
    AllCategories,

    // Session badge
    Login,
    Logout,
}

impl Message {
    pub fn text(self, lang: Language) -> &'static str {
        match lang {
            Language::Ar => self.arabic(),
            Language::En => self.english(),
        }
    }

    fn arabic(self) -> &'static str {
        match self {
            Message::FillAllFields => "يرجى ملء جميع الحقول",
            Message::InvalidEmail => "يرجى إدخال بريد إلكتروني صحيح",
            Message::NameTooShort => "يرجى إدخال اسم صحيح (حرفين على الأقل)",
            Message::InvalidPhone => "يرجى إدخال رقم هاتف صحيح",
            Message::PasswordTooShort => "كلمة المرور يجب أن تحتوي على 6 أحرف على الأقل",
            Message::PasswordMismatch => "كلمة المرور وتأكيد كلمة المرور غير متطابقتين",
            Message::LoginFailed => "حدث خطأ في تسجيل الدخول",
            Message::LoginUnreachable => "تعذر الاتصال بالخادم. حاول مرة أخرى.",
            Message::SignIn => "تسجيل الدخول",
            Message::SigningIn => "جاري تسجيل الدخول...",
            Message::NoAccount => "ليس لديك حساب؟ أنشئ حساباً",
            Message::RegistrationFailed => "حدث خطأ في إنشاء الحساب",
            Message::RegistrationUnreachable => "حدث خطأ أثناء الاتصال بالخادم",
            Message::RegistrationSucceeded => "تم إنشاء الحساب بنجاح! سيتم توجيهك لصفحة تسجيل الدخول...",
            Message::CreateAccount => "إنشاء حساب",
            Message::CreatingAccount => "جاري إنشاء الحساب...",
            Message::HaveAccount => "لديك حساب بالفعل؟ سجّل الدخول",
            Message::NameLabel => "الاسم الكامل",
            Message::EmailLabel => "البريد الإلكتروني",
            Message::PhoneLabel => "رقم الهاتف",
            Message::PasswordLabel => "كلمة المرور",
            Message::ConfirmPasswordLabel => "تأكيد كلمة المرور",
            Message::Loading => "جاري التحميل...",
            Message::ProductsUnavailable => "تعذر تحميل المنتجات. حاول مرة أخرى.",
            Message::NoProducts => "لا توجد منتجات.",
            Message::AddToCart => "أضف إلى السلة",
            Message::Retry => "إعادة المحاولة",
            Message::Search => "بحث",
            Message::SearchPlaceholder => "ابحث عن منتج...",
            Message::AllCategories => "كل الفئات",
            Message::Login => "تسجيل الدخول",
            Message::Logout => "تسجيل الخروج",
        }
    }

    fn english(self) -> &'static str {
        match self {
            Message::FillAllFields => "Please fill in all fields",
            Message::InvalidEmail => "Please enter a valid email address",
            Message::NameTooShort => "Please enter a valid name (at least 2 characters)",
            Message::InvalidPhone => "Please enter a valid phone number",
            Message::PasswordTooShort => "Password must be at least 6 characters",
            Message::PasswordMismatch => "Password and confirmation do not match",
            Message::LoginFailed => "Login failed",
            Message::LoginUnreachable => "Cannot reach the server. Please try again.",
            Message::SignIn => "Sign in",
            Message::SigningIn => "Signing in...",
            Message::NoAccount => "No account yet? Register",
            Message::RegistrationFailed => "Registration failed",
            Message::RegistrationUnreachable => "Error while contacting the server",
            Message::RegistrationSucceeded => "Account created! Redirecting to the login page...",
            Message::CreateAccount => "Create account",
            Message::CreatingAccount => "Creating account...",
            Message::HaveAccount => "Already have an account? Sign in",
            Message::NameLabel => "Full name",
            Message::EmailLabel => "Email",
            Message::PhoneLabel => "Phone",
            Message::PasswordLabel => "Password",
            Message::ConfirmPasswordLabel => "Confirm password",
            Message::Loading => "Loading...",
            Message::ProductsUnavailable => "Failed to load products. Please try again.",
            Message::NoProducts => "No products found.",
            Message::AddToCart => "Add to Cart",
            Message::Retry => "Retry",
            Message::Search => "Search",
            Message::SearchPlaceholder => "Search products...",
            Message::AllCategories => "All categories",
            Message::Login => "Login",
            Message::Logout => "Logout",
        }
    }
}
